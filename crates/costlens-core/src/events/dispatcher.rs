//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::CostlensEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CostlensEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn CostlensEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving the event.
    fn emit<F: Fn(&dyn CostlensEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    pub fn emit_significant_change(&self, event: &SignificantChangeEvent) {
        self.emit("significant_change", |h| h.on_significant_change(event));
    }

    pub fn emit_history_updated(&self, event: &HistoryUpdatedEvent) {
        self.emit("history_updated", |h| h.on_history_updated(event));
    }

    pub fn emit_registry_reset(&self, event: &RegistryResetEvent) {
        self.emit("registry_reset", |h| h.on_registry_reset(event));
    }

    pub fn emit_session_disabled(&self, event: &SessionDisabledEvent) {
        self.emit("session_disabled", |h| h.on_session_disabled(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
