//! Handler registry dispatching lifecycle events in priority order.

use std::sync::Arc;

use needs_core::{CapabilitySet, NeedsConfig};
use tracing::trace;

use super::{ActorEventHandler, AttachHandler, CloneHandler};
use crate::events::ActorEvent;

/// Ordered collection of lifecycle handlers.
pub struct HandlerRegistry {
    handlers: Arc<[Arc<dyn ActorEventHandler>]>,
}

impl HandlerRegistry {
    /// Creates a registry; handlers are sorted by priority (lower first).
    pub fn new(mut handlers: Vec<Arc<dyn ActorEventHandler>>) -> Self {
        handlers.sort_by_key(|h| h.priority());
        Self {
            handlers: handlers.into(),
        }
    }

    /// Registry with the attachment hook and the death cloner.
    pub fn with_defaults(capabilities: CapabilitySet, config: NeedsConfig) -> Self {
        Self::from_attach(AttachHandler::new(capabilities, config))
    }

    /// Registry with a preconfigured attachment hook and the death cloner.
    pub fn from_attach(attach: AttachHandler) -> Self {
        Self::new(vec![
            Arc::new(attach) as Arc<dyn ActorEventHandler>,
            Arc::new(CloneHandler) as Arc<dyn ActorEventHandler>,
        ])
    }

    /// Dispatches `event` to every handler, synchronously and in order.
    pub fn dispatch(&self, event: &mut ActorEvent<'_>) {
        for handler in self.handlers.iter() {
            trace!(
                target: "runtime::handlers",
                handler = handler.name(),
                event = event.name(),
                "Dispatching actor event"
            );
            handler.handle(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names and priorities in dispatch order (for debugging).
    pub fn handlers(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.handlers.iter().map(|h| (h.name(), h.priority()))
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults(CapabilitySet::all(), NeedsConfig::default())
    }
}
