//! Top-level costlens configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ReportConfig, SignificanceConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "costlens.toml";

/// Comma-separated whitelist override.
pub const WHITELIST_ENV_VAR: &str = "COSTLENS_WHITELIST";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`COSTLENS_*`)
/// 2. Project config (`costlens.toml` in project root)
/// 3. User config (`~/.costlens/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CostlensConfig {
    pub significance: SignificanceConfig,
    pub report: ReportConfig,
}

impl CostlensConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a broken file is fatal.
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        tracing::debug!(
            whitelist = config.significance.whitelist.len(),
            excluded = config.report.excluded_procedures.len(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CostlensConfig) -> Result<(), ConfigError> {
        for name in &config.significance.whitelist {
            if !is_identifier(name) {
                return Err(ConfigError::ValidationFailed {
                    field: "significance.whitelist".to_string(),
                    message: format!("'{name}' is not a method name"),
                });
            }
        }
        if config
            .report
            .excluded_procedures
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "report.excluded_procedures".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CostlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CostlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; non-empty lists in `other` replace `base`.
    fn merge(base: &mut CostlensConfig, other: &CostlensConfig) {
        if !other.significance.whitelist.is_empty() {
            base.significance.whitelist = other.significance.whitelist.clone();
        }
        if !other.report.excluded_procedures.is_empty() {
            base.report.excluded_procedures = other.report.excluded_procedures.clone();
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut CostlensConfig) {
        if let Ok(val) = std::env::var(WHITELIST_ENV_VAR) {
            let names: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !names.is_empty() {
                config.significance.whitelist = names;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Returns the user config path: `~/.costlens/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".costlens").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("sort"));
        assert!(is_identifier("$get_1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("foo()"));
        assert!(!is_identifier("a b"));
    }
}
