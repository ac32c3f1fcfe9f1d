//! Diff segment types.

use serde::{Deserialize, Serialize};

/// Which side(s) of the diff a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Unchanged,
}

/// A run of consecutive lines sharing one [`ChangeKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: ChangeKind,
    /// The lines, terminators included.
    pub text: String,
    pub line_count: usize,
}

impl DiffSegment {
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Unchanged
    }
}
