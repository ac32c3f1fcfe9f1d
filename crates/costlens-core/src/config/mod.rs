//! Configuration system for costlens.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod costlens_config;
pub mod report_config;
pub mod significance_config;

pub use costlens_config::CostlensConfig;
pub use report_config::ReportConfig;
pub use significance_config::SignificanceConfig;
