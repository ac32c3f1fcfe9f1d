//! Change-significance classification.
//!
//! Decides whether an edit is likely to change some method's asymptotic
//! cost (a loop or a call to a non-constant method was added or removed) and
//! attributes each flagged construct to its enclosing method.

pub mod classifier;
pub mod types;

pub use classifier::{ClassificationInput, SignificanceClassifier};
pub use types::SignificanceReport;
