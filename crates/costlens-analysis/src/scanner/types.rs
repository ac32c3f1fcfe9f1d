//! Scanner output types: declarations, identities, occurrences, ranges.

use std::fmt;
use std::ops::Range;

use costlens_core::types::collections::SmallVec4;
use serde::{Deserialize, Serialize};

/// Zero-based line/column position. Columns count chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Half-open span between two positions in one text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

/// The correlation key between a declaration, a cause entry and a cost entry:
/// a method name plus its resolved parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodIdentity {
    pub name: String,
    pub parameter_types: Vec<String>,
}

impl MethodIdentity {
    pub fn new<I, T>(name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Serialized form, `name(type1,type2)`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MethodIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_types.join(","))
    }
}

/// A method declaration site found in one text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    /// Resolved parameter types: generics stripped, bounds substituted,
    /// varargs written as arrays.
    pub parameter_types: SmallVec4<String>,
    /// From the first modifier or annotation to the closing parenthesis.
    pub declaration_range: TextRange,
    /// Just the method name token.
    pub name_range: TextRange,
    /// Byte offsets of the declaration header in the scanned text.
    pub span: Range<usize>,
}

impl MethodDeclaration {
    pub fn identity(&self) -> MethodIdentity {
        MethodIdentity::new(self.name.clone(), self.parameter_types.iter().cloned())
    }
}

/// What a flagged construct looks like.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OccurrenceKind {
    /// `while (...)` or `for (...)`.
    Loop,
    /// `name(...)`.
    Call { name: String },
}

/// A call-like or loop construct found in changed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub kind: OccurrenceKind,
    /// The literal source fragment, e.g. `baz()` or `for (int i=0;i<n;i++)`.
    pub text: String,
    /// Byte offset of the fragment in the scanned text.
    pub offset: usize,
}

impl Occurrence {
    pub fn is_loop(&self) -> bool {
        matches!(self.kind, OccurrenceKind::Loop)
    }

    pub fn call_name(&self) -> Option<&str> {
        match &self.kind {
            OccurrenceKind::Call { name } => Some(name),
            OccurrenceKind::Loop => None,
        }
    }
}
