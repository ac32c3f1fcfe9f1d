//! Cost history persistence errors.

use super::error_code::{self, CostlensErrorCode};

/// Errors raised when a cost history is serialized or restored.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History serialization failed: {0}")]
    Serialize(String),

    #[error("History deserialization failed: {0}")]
    Deserialize(String),
}

impl CostlensErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        error_code::HISTORY_ERROR
    }
}
