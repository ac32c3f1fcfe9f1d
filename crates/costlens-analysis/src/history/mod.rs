//! Per-method cost history, most recent first.

pub mod tracker;

pub use tracker::{CostHistory, HistoryUpdate};
