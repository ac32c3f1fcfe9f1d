//! Error handling for costlens.
//! One error enum per subsystem, `thiserror` only.
//!
//! Extraction, diffing, classification, registry and history updates never
//! fail. These enums cover the boundaries around them: configuration,
//! scanner construction, cost report ingestion and history persistence.

pub mod config_error;
pub mod error_code;
pub mod history_error;
pub mod report_error;
pub mod scanner_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use error_code::CostlensErrorCode;
pub use history_error::HistoryError;
pub use report_error::ReportError;
pub use scanner_error::ScannerError;
pub use session_error::SessionError;
