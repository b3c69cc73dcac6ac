//! Handler that attaches capability providers to new actor instances.

use needs_core::{CapabilitySet, NeedsConfig};
use tracing::{debug, trace};

use super::ActorEventHandler;
use crate::events::ActorEvent;

/// Attaches one fresh provider per capability kind in its set.
///
/// Only players receive providers unless `attach_non_players` is set.
#[derive(Debug, Clone)]
pub struct AttachHandler {
    capabilities: CapabilitySet,
    config: NeedsConfig,
    attach_non_players: bool,
}

impl AttachHandler {
    pub fn new(capabilities: CapabilitySet, config: NeedsConfig) -> Self {
        Self {
            capabilities,
            config,
            attach_non_players: false,
        }
    }

    #[must_use]
    pub fn attach_non_players(mut self, enabled: bool) -> Self {
        self.attach_non_players = enabled;
        self
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }
}

impl ActorEventHandler for AttachHandler {
    fn name(&self) -> &'static str {
        "attach"
    }

    fn priority(&self) -> i32 {
        -100 // Providers must exist before anything else touches the actor
    }

    fn handle(&self, event: &mut ActorEvent<'_>) {
        let ActorEvent::Created { actor } = event else {
            return;
        };

        if !actor.is_player() && !self.attach_non_players {
            trace!(
                target: "runtime::handlers",
                actor = %actor.id(),
                "Skipping capability attachment for non-player"
            );
            return;
        }

        for provider in self.capabilities.providers(self.config) {
            actor.attach(provider);
        }

        debug!(
            target: "runtime::handlers",
            actor = %actor.id(),
            count = self.capabilities.len(),
            "Attached capability providers"
        );
    }
}
