//! Significance classifier configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the change-significance classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SignificanceConfig {
    /// Method names whose calls never make an edit significant,
    /// even when the method is known to have non-constant cost.
    pub whitelist: Vec<String>,
}

impl SignificanceConfig {
    /// Whether `name` is exempt from triggering significance.
    pub fn is_whitelisted(&self, name: &str) -> bool {
        self.whitelist.iter().any(|w| w == name)
    }
}
