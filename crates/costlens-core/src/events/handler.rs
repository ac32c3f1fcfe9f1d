//! CostlensEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling costlens events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait CostlensEventHandler: Send + Sync {
    fn on_significant_change(&self, _event: &SignificantChangeEvent) {}
    fn on_history_updated(&self, _event: &HistoryUpdatedEvent) {}
    fn on_registry_reset(&self, _event: &RegistryResetEvent) {}
    fn on_session_disabled(&self, _event: &SessionDisabledEvent) {}
}
