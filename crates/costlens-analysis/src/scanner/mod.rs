//! Declaration and occurrence scanning.
//!
//! The classifier only talks to [`SourceScanner`]; [`RegexScanner`] is the
//! structural-pattern implementation for C-family method/class grammars.
//! Known weak spots of the pattern approach: annotations with parenthesized
//! arguments inside parameter lists, lambdas, and text inside string
//! literals or comments.

pub mod line_index;
pub mod occurrences;
pub mod params;
pub mod regex_scanner;
pub mod type_extensions;
pub mod types;

pub use regex_scanner::RegexScanner;
pub use type_extensions::TypeExtensionMap;
pub use types::{
    MethodDeclaration, MethodIdentity, Occurrence, OccurrenceKind, Position, TextRange,
};

/// Finds declarations and flaggable constructs in source text.
///
/// Implementations never fail: anything they cannot make sense of is skipped.
pub trait SourceScanner {
    /// Generic bounds declared by the class headers in `text`.
    fn type_extensions(&self, text: &str) -> TypeExtensionMap;

    /// Method declarations in source order, parameter types resolved
    /// through `types`.
    fn declarations(&self, text: &str, types: &TypeExtensionMap) -> Vec<MethodDeclaration>;

    /// Loops and call-like constructs in source order.
    fn occurrences(&self, text: &str) -> Vec<Occurrence>;

    /// Declarations of a standalone snapshot, using its own bounds.
    fn extract(&self, text: &str) -> Vec<MethodDeclaration> {
        let types = self.type_extensions(text);
        self.declarations(text, &types)
    }

    /// `text` with every declaration header removed.
    fn strip_declarations(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for decl in self.declarations(text, &TypeExtensionMap::new()) {
            out.push_str(&text[last..decl.span.start]);
            last = decl.span.end;
        }
        out.push_str(&text[last..]);
        out
    }
}
