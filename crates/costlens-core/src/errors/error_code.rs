//! CostlensErrorCode trait for host-facing error strings.

/// Trait giving every costlens error a stable code.
/// Hosts (editor extensions, CLIs) match on the code rather than the message.
pub trait CostlensErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCANNER_ERROR: &str = "SCANNER_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const HISTORY_ERROR: &str = "HISTORY_ERROR";
