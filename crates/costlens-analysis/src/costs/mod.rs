//! Per-method cost entries and analyzer report ingestion.

pub mod report;
pub mod types;

pub use report::CostReport;
pub use types::{CostEntry, CostFacet, SourceLocation, TraceStep};
