//! Event payload types.

/// Payload for `on_significant_change`.
///
/// Carries nothing: it fires once per classification whatever the outcome,
/// and subscribers read the classifier's return value to react.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignificantChangeEvent;

/// Payload for `on_history_updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryUpdatedEvent {
    /// Ids whose history gained a new head entry.
    pub appended: Vec<String>,
    /// Entries discarded because their polynomial matched the head.
    pub unchanged: usize,
}

/// Scope of a registry reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryResetScope {
    /// Project-wide re-analysis replaced all knowledge.
    All,
    /// A single file was re-analyzed.
    File,
}

/// Payload for `on_registry_reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryResetEvent {
    pub scope: RegistryResetScope,
    /// Number of names dropped from the registry.
    pub removed: usize,
}

/// Payload for `on_session_disabled`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDisabledEvent {
    pub snapshots_dropped: usize,
    pub histories_dropped: usize,
}
