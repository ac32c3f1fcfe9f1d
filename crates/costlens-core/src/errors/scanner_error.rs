//! Scanner construction errors.

use super::error_code::{self, CostlensErrorCode};

/// Errors raised while building a source scanner.
/// Scanning itself never fails; only pattern compilation can.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    #[error("Pattern '{name}' failed to compile: {message}")]
    PatternCompilation { name: &'static str, message: String },
}

impl CostlensErrorCode for ScannerError {
    fn error_code(&self) -> &'static str {
        error_code::SCANNER_ERROR
    }
}
