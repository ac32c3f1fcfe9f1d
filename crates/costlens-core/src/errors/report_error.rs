//! Cost report ingestion errors.

use super::error_code::{self, CostlensErrorCode};

/// Errors that can occur while reading an analyzer cost report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Cost report is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Cost report record {index} is malformed: {message}")]
    MalformedRecord { index: usize, message: String },
}

impl CostlensErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
