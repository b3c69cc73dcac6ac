//! Lifecycle events the host fires for actor instances.
//!
//! Events borrow the actors involved for the duration of one synchronous
//! dispatch. During a replacement the original instance is only readable and
//! the replacement is only writable from handlers' point of view.

use crate::actor::Actor;

/// Why an actor instance was replaced by a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplacementCause {
    /// The actor died and respawned; its state must be transplanted.
    Death,
    /// The actor moved to another dimension/zone. The new instance is a
    /// continuation: handlers leave it alone and the runtime restores it
    /// from the old instance's saved tree.
    DimensionChange,
}

impl ReplacementCause {
    pub const fn is_death(self) -> bool {
        matches!(self, Self::Death)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Death => "death",
            Self::DimensionChange => "dimension_change",
        }
    }
}

/// Actor lifecycle event dispatched to [`ActorEventHandler`](crate::handlers::ActorEventHandler)s.
#[derive(Debug)]
pub enum ActorEvent<'a> {
    /// A new actor instance was constructed and needs its providers.
    Created { actor: &'a mut Actor },

    /// `replacement` takes over from `original`.
    Replaced {
        original: &'a Actor,
        replacement: &'a mut Actor,
        cause: ReplacementCause,
    },
}

impl ActorEvent<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Replaced { .. } => "replaced",
        }
    }
}
