//! Classification results and their application to cost data.

use costlens_core::types::collections::BTreeMap;

use crate::costs::types::CostEntry;
use crate::history::CostHistory;
use crate::scanner::types::MethodIdentity;

/// Outcome of one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignificanceReport {
    significant: bool,
    /// Identity key (`name(types)`) to cause expressions, first-seen order,
    /// no duplicates.
    causes: BTreeMap<String, Vec<String>>,
    /// Causes found before any declaration header in the diff.
    unattributed: Vec<String>,
}

impl SignificanceReport {
    pub fn is_significant(&self) -> bool {
        self.significant
    }

    /// Record a flagged construct under its enclosing method, if known.
    pub fn record_cause(&mut self, context: Option<&MethodIdentity>, expression: &str) {
        self.significant = true;
        let list = match context {
            Some(identity) => self.causes.entry(identity.key()).or_default(),
            None => &mut self.unattributed,
        };
        if !list.iter().any(|c| c == expression) {
            list.push(expression.to_string());
        }
    }

    pub fn causes_for(&self, identity_key: &str) -> Option<&[String]> {
        self.causes.get(identity_key).map(Vec::as_slice)
    }

    pub fn causes(&self) -> &BTreeMap<String, Vec<String>> {
        &self.causes
    }

    pub fn unattributed(&self) -> &[String] {
        &self.unattributed
    }

    /// Set every entry's `change_cause_methods` from this report and copy
    /// the same value onto the head of the entry's history, if it has one.
    /// Entries without causes get `None`.
    pub fn apply_to_costs(&self, costs: &mut [CostEntry], history: &mut CostHistory) {
        for cost in costs.iter_mut() {
            let causes = self.causes_for(&cost.identity_key()).map(<[String]>::to_vec);
            if let Some(head) = history.head_mut(&cost.id) {
                head.change_cause_methods = causes.clone();
            }
            cost.change_cause_methods = causes;
        }
    }
}
