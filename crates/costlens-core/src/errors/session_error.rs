//! Session-level errors.

use super::error_code::CostlensErrorCode;
use super::{ConfigError, HistoryError, ReportError, ScannerError};

/// Errors surfaced by a costlens session.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scanner error: {0}")]
    Scanner(#[from] ScannerError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

impl CostlensErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scanner(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::History(e) => e.error_code(),
        }
    }
}
