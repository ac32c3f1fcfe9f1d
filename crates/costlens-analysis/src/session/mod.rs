//! Session state container.
//!
//! One `CostSession` per editor session. It owns every piece of mutable
//! state (snapshots, registry, history, last report) so tests and hosts can
//! build isolated instances. Mutation takes `&mut self`; a host that fires
//! save notifications from several threads wraps the session in a `Mutex`.

use std::path::Path;
use std::sync::Arc;

use costlens_core::config::CostlensConfig;
use costlens_core::errors::SessionError;
use costlens_core::events::types::{
    HistoryUpdatedEvent, RegistryResetEvent, RegistryResetScope, SessionDisabledEvent,
};
use costlens_core::events::{CostlensEventHandler, EventDispatcher};
use costlens_core::types::collections::FxHashMap;

use crate::costs::{CostEntry, CostReport};
use crate::history::{CostHistory, HistoryUpdate};
use crate::registry::NonConstantRegistry;
use crate::scanner::SourceScanner;
use crate::significance::{ClassificationInput, SignificanceClassifier, SignificanceReport};

pub struct CostSession {
    config: CostlensConfig,
    classifier: SignificanceClassifier,
    snapshots: FxHashMap<String, String>,
    registry: NonConstantRegistry,
    history: CostHistory,
    last_report: Option<SignificanceReport>,
    events: EventDispatcher,
}

impl CostSession {
    pub fn new(config: CostlensConfig) -> Result<Self, SessionError> {
        Ok(Self {
            config,
            classifier: SignificanceClassifier::new()?,
            snapshots: FxHashMap::default(),
            registry: NonConstantRegistry::new(),
            history: CostHistory::new(),
            last_report: None,
            events: EventDispatcher::new(),
        })
    }

    /// Session configured from the layered config rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, SessionError> {
        Self::new(CostlensConfig::load(root)?)
    }

    pub fn register_handler(&mut self, handler: Arc<dyn CostlensEventHandler>) {
        self.events.register(handler);
    }

    /// Store the first snapshot of `file`. No classification happens.
    pub fn open(&mut self, file: &str, text: &str) {
        tracing::debug!(file, bytes = text.len(), "snapshot opened");
        self.snapshots.insert(file.to_string(), text.to_string());
    }

    /// Classify the edit since the stored snapshot of `file`, then make
    /// `text` the new snapshot. A file without a snapshot is never
    /// significant.
    pub fn on_save(&mut self, file: &str, text: &str) -> SignificanceReport {
        let previous = self.snapshots.get(file).map(String::as_str);
        let types = previous
            .map(|p| self.classifier.scanner().type_extensions(p))
            .unwrap_or_default();
        let input = ClassificationInput {
            previous,
            current: text,
            registry: &self.registry,
            whitelist: &self.config.significance,
            types: &types,
        };
        let report = self.classifier.classify_and_notify(&input, &self.events);

        tracing::info!(
            file,
            significant = report.is_significant(),
            "save classified"
        );
        self.snapshots.insert(file.to_string(), text.to_string());
        self.last_report = Some(report.clone());
        report
    }

    /// Record a fresh cost list into the history and attach the latest
    /// report's attribution to it and to the history heads.
    pub fn apply_costs(&mut self, costs: Vec<CostEntry>) -> Vec<CostEntry> {
        let update = self.history.record(&costs);
        self.finish_apply(costs, update)
    }

    /// [`apply_costs`](Self::apply_costs) with an explicit timestamp.
    pub fn apply_costs_at(&mut self, costs: Vec<CostEntry>, timestamp_ms: u64) -> Vec<CostEntry> {
        let update = self.history.record_at(&costs, timestamp_ms);
        self.finish_apply(costs, update)
    }

    /// Parse an analyzer cost report and apply it.
    pub fn ingest_report(&mut self, json: &str) -> Result<Vec<CostEntry>, SessionError> {
        let report = CostReport::from_json(json, &self.config.report)?;
        Ok(self.apply_costs(report.into_entries()))
    }

    fn finish_apply(&mut self, mut costs: Vec<CostEntry>, update: HistoryUpdate) -> Vec<CostEntry> {
        let report = self.last_report.clone().unwrap_or_default();
        report.apply_to_costs(&mut costs, &mut self.history);
        self.events.emit_history_updated(&HistoryUpdatedEvent {
            appended: update.appended,
            unchanged: update.unchanged,
        });
        costs
    }

    /// Add the non-constant entries of `costs` to the registry.
    pub fn record_non_constant(&mut self, costs: &[CostEntry]) -> usize {
        self.registry.record_costs(costs)
    }

    /// A single file was re-analyzed: forget its `names`, then learn from
    /// its fresh `costs`.
    pub fn refresh_registry_for_file<I, S>(&mut self, names: I, costs: &[CostEntry]) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = self.registry.reset_for_file(names);
        self.events.emit_registry_reset(&RegistryResetEvent {
            scope: RegistryResetScope::File,
            removed,
        });
        self.registry.record_costs(costs)
    }

    /// A project-wide analysis replaces all registry knowledge.
    pub fn reset_all(&mut self) -> usize {
        let removed = self.registry.reset_all();
        self.events.emit_registry_reset(&RegistryResetEvent {
            scope: RegistryResetScope::All,
            removed,
        });
        removed
    }

    /// Drop all session state. The session stays usable afterwards.
    pub fn disable(&mut self) {
        let event = SessionDisabledEvent {
            snapshots_dropped: self.snapshots.len(),
            histories_dropped: self.history.len(),
        };
        self.snapshots.clear();
        self.registry.reset_all();
        self.history.clear();
        self.last_report = None;
        tracing::info!(
            snapshots = event.snapshots_dropped,
            histories = event.histories_dropped,
            "session disabled"
        );
        self.events.emit_session_disabled(&event);
    }

    pub fn config(&self) -> &CostlensConfig {
        &self.config
    }

    pub fn snapshot(&self, file: &str) -> Option<&str> {
        self.snapshots.get(file).map(String::as_str)
    }

    pub fn registry(&self) -> &NonConstantRegistry {
        &self.registry
    }

    pub fn history(&self) -> &CostHistory {
        &self.history
    }

    pub fn last_report(&self) -> Option<&SignificanceReport> {
        self.last_report.as_ref()
    }
}

impl std::fmt::Debug for CostSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostSession")
            .field("snapshots", &self.snapshots.len())
            .field("registry", &self.registry.len())
            .field("history", &self.history.len())
            .field("handlers", &self.events.handler_count())
            .finish()
    }
}
