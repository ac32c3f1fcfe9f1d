//! Registry of method names with non-constant execution cost.
//!
//! Keyed by bare method name, not full identity: a call site in changed text
//! only shows the name.

use costlens_core::types::collections::FxHashSet;

use crate::costs::types::CostEntry;

/// Method names believed to have non-constant execution cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonConstantRegistry {
    names: FxHashSet<String>,
}

impl NonConstantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Add the names of entries the analyzer measured as non-constant.
    /// Returns how many names were new.
    pub fn record_costs(&mut self, costs: &[CostEntry]) -> usize {
        let before = self.names.len();
        for entry in costs.iter().filter(|e| !e.exec_cost.is_constant()) {
            self.names.insert(entry.method_name.clone());
        }
        self.names.len() - before
    }

    /// Forget everything. Called when a project-wide analysis replaces all
    /// prior data. Returns the number of names dropped.
    pub fn reset_all(&mut self) -> usize {
        let removed = self.names.len();
        self.names.clear();
        tracing::debug!(removed, "non-constant registry cleared");
        removed
    }

    /// Forget only `names`, the methods of one re-analyzed file, so methods
    /// of other files keep their status. Returns the number of names dropped.
    pub fn reset_for_file<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = names
            .into_iter()
            .filter(|name| self.names.remove(name.as_ref()))
            .count();
        tracing::debug!(removed, remaining = self.names.len(), "non-constant registry pruned");
        removed
    }
}
