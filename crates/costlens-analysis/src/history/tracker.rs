//! Cost-history tracker.
//!
//! A history grows only when a method's execution polynomial changes. The
//! head (index 0) is always the newest entry and carries the latest change
//! attribution.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use costlens_core::errors::HistoryError;
use costlens_core::types::collections::FxHashMap;

use crate::costs::types::CostEntry;

/// Summary of one [`CostHistory::record`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryUpdate {
    /// Ids that gained a new head, in input order.
    pub appended: Vec<String>,
    /// Entries discarded because nothing visible changed.
    pub unchanged: usize,
}

/// Mapping from cost-entry id to its entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostHistory {
    entries: FxHashMap<String, Vec<CostEntry>>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh cost list stamped with the wall clock.
    pub fn record(&mut self, costs: &[CostEntry]) -> HistoryUpdate {
        self.record_at(costs, now_millis())
    }

    /// Record a fresh cost list stamped with `timestamp_ms`.
    ///
    /// An entry is prepended when its id has no history or its
    /// `exec_cost.polynomial` differs textually from the head's; otherwise it
    /// is dropped. A stamp older than the current head is raised to the
    /// head's so the head stays the most recent entry.
    pub fn record_at(&mut self, costs: &[CostEntry], timestamp_ms: u64) -> HistoryUpdate {
        let mut update = HistoryUpdate::default();

        for cost in costs {
            let history = self.entries.entry(cost.id.clone()).or_default();
            let changed = history
                .first()
                .map_or(true, |head| head.exec_cost.polynomial != cost.exec_cost.polynomial);
            if !changed {
                update.unchanged += 1;
                continue;
            }

            let floor = history.first().and_then(|head| head.timestamp).unwrap_or(0);
            let mut entry = cost.clone();
            entry.timestamp = Some(timestamp_ms.max(floor));
            history.insert(0, entry);
            update.appended.push(cost.id.clone());
        }

        tracing::debug!(
            appended = update.appended.len(),
            unchanged = update.unchanged,
            "cost history recorded"
        );
        update
    }

    /// All entries for `id`, newest first. Empty when unknown.
    pub fn get(&self, id: &str) -> &[CostEntry] {
        self.entries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn head(&self, id: &str) -> Option<&CostEntry> {
        self.entries.get(id).and_then(|h| h.first())
    }

    pub fn head_mut(&mut self, id: &str) -> Option<&mut CostEntry> {
        self.entries.get_mut(id).and_then(|h| h.first_mut())
    }

    /// Number of methods with a history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(|e| HistoryError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        serde_json::from_str(json).map_err(|e| HistoryError::Deserialize(e.to_string()))
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::types::{CostFacet, SourceLocation};

    fn entry(id: &str, poly: &str) -> CostEntry {
        CostEntry {
            id: id.to_string(),
            method_name: "m".to_string(),
            parameter_types: vec![],
            loc: SourceLocation {
                file: "A.java".to_string(),
                line: 1,
            },
            alloc_cost: CostFacet::default(),
            exec_cost: CostFacet {
                polynomial: poly.to_string(),
                degree: Some(1),
                big_o: "O(n)".to_string(),
            },
            timestamp: None,
            change_cause_methods: None,
            trace: None,
        }
    }

    #[test]
    fn clock_going_backwards_keeps_head_newest() {
        let mut history = CostHistory::new();
        history.record_at(&[entry("X", "n")], 2_000);
        history.record_at(&[entry("X", "n * n")], 1_000);
        let entries = history.get("X");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, Some(2_000));
        assert_eq!(entries[0].exec_cost.polynomial, "n * n");
    }

    #[test]
    fn wall_clock_stamp_is_set() {
        let mut history = CostHistory::new();
        history.record(&[entry("X", "n")]);
        assert!(history.head("X").and_then(|e| e.timestamp).unwrap() > 0);
    }
}
