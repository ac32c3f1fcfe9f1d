//! Cost report ingestion configuration.

use serde::{Deserialize, Serialize};

/// Procedure names the analyzer reports for constructor-equivalent code.
pub const DEFAULT_EXCLUDED_PROCEDURES: &[&str] = &["<init>", "<clinit>"];

/// Configuration for reading analyzer cost reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Procedure names dropped before records reach the tracker.
    /// Empty means the defaults (`<init>`, `<clinit>`).
    pub excluded_procedures: Vec<String>,
}

impl ReportConfig {
    /// Whether records for `procedure_name` are dropped.
    pub fn is_excluded(&self, procedure_name: &str) -> bool {
        if self.excluded_procedures.is_empty() {
            DEFAULT_EXCLUDED_PROCEDURES.contains(&procedure_name)
        } else {
            self.excluded_procedures.iter().any(|p| p == procedure_name)
        }
    }
}
