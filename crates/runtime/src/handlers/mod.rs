//! Handlers reacting to actor lifecycle events.
//!
//! Handlers run synchronously inside the host's event callback, in priority
//! order, and never fail: anything they cannot do is skipped and logged.

mod attach;
mod clone;
mod registry;

pub use attach::AttachHandler;
pub use clone::{CloneHandler, CloneReport, clone_capabilities};
pub use registry::HandlerRegistry;

use crate::events::ActorEvent;

/// A reaction to actor lifecycle events.
pub trait ActorEventHandler: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Lower values run first. Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Handles one event. Events the handler does not care about are ignored.
    fn handle(&self, event: &mut ActorEvent<'_>);
}
