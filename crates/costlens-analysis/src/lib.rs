//! Source-change significance and cost-history tracking.
//!
//! Given two snapshots of a source file, decides whether the edit is likely
//! to change any method's asymptotic cost and which methods it touches. Keeps
//! a per-method history of measured costs that grows only when a cost
//! polynomial changes.
//!
//! - [`scanner`]: declaration headers, generic bounds and call/loop
//!   occurrences.
//! - [`diff`]: line-level diff between snapshots.
//! - [`significance`]: the change classifier and its attribution.
//! - [`registry`]: names of methods measured as non-constant.
//! - [`costs`]: cost entries and analyzer report ingestion.
//! - [`history`]: per-method cost history.
//! - [`session`]: the state container a host drives.

pub mod costs;
pub mod diff;
pub mod history;
pub mod registry;
pub mod scanner;
pub mod session;
pub mod significance;

pub use costs::{CostEntry, CostReport};
pub use diff::{DiffProvider, LineDiff};
pub use history::CostHistory;
pub use registry::NonConstantRegistry;
pub use scanner::{MethodDeclaration, MethodIdentity, RegexScanner, SourceScanner};
pub use session::CostSession;
pub use significance::{ClassificationInput, SignificanceClassifier, SignificanceReport};
