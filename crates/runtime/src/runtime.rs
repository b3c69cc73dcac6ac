//! Host-facing entry point tying actors, lifecycle handlers and persistence
//! together.
//!
//! The host calls [`Runtime::spawn`] when an actor is constructed and
//! [`Runtime::replace`] when an instance is swapped for a new one. Both run
//! the registered handlers synchronously before returning.

use std::collections::HashMap;
use std::sync::Arc;

use needs_core::NeedsError;
use tracing::{debug, error, info};

use crate::actor::{Actor, ActorId, ActorKind};
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{ActorEvent, ReplacementCause};
use crate::handlers::{AttachHandler, HandlerRegistry};
use crate::repository::{ActorRepository, FileActorRepository, RepositoryError};

/// Live actor instances plus the handlers and repository serving them.
pub struct Runtime {
    registry: HandlerRegistry,
    repository: Arc<dyn ActorRepository>,
    actors: HashMap<ActorId, Actor>,
}

impl Runtime {
    pub fn new(registry: HandlerRegistry, repository: Arc<dyn ActorRepository>) -> Self {
        Self {
            registry,
            repository,
            actors: HashMap::new(),
        }
    }

    /// Builds a runtime with the default handlers and a file repository.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let attach = AttachHandler::new(config.capabilities.clone(), config.needs)
            .attach_non_players(config.attach_non_players);
        let repository = FileActorRepository::new(&config.save_dir)?;

        info!(
            target: "runtime",
            save_dir = %config.save_dir.display(),
            capabilities = config.capabilities.len(),
            "Runtime configured"
        );

        Ok(Self::new(
            HandlerRegistry::from_attach(attach),
            Arc::new(repository),
        ))
    }

    /// Creates an actor instance, attaches its providers and restores any
    /// saved capability data.
    pub fn spawn(&mut self, id: ActorId, kind: ActorKind) -> Result<&mut Actor> {
        if self.actors.contains_key(&id) {
            return Err(RuntimeError::ActorAlreadySpawned(id));
        }

        let mut actor = Actor::new(id, kind);
        self.registry
            .dispatch(&mut ActorEvent::Created { actor: &mut actor });

        match self.repository.load(id) {
            Ok(Some(data)) => {
                actor.load(&data);
                debug!(target: "runtime", actor = %id, "Restored saved capabilities");
            }
            Ok(None) => {}
            // Corrupt saves start the actor empty.
            Err(err @ RepositoryError::CorruptedData { .. }) => error!(
                target: "runtime",
                actor = %id,
                error = %err,
                severity = err.severity().as_str(),
                code = err.error_code(),
                "Saved capabilities are corrupted; starting empty"
            ),
            Err(err) => return Err(err.into()),
        }

        Ok(self.actors.entry(id).or_insert(actor))
    }

    /// Replaces the live instance of `id` with a fresh one.
    ///
    /// The new instance receives its own providers first; the replacement
    /// event then runs with the old instance still readable. Handlers only
    /// transplant state on death. Any other cause continues the same actor,
    /// so the new instance is then restored from the old one's saved tree.
    /// The old instance is dropped afterwards.
    pub fn replace(&mut self, id: ActorId, cause: ReplacementCause) -> Result<&mut Actor> {
        let original = self
            .actors
            .remove(&id)
            .ok_or(RuntimeError::ActorNotFound(id))?;

        let mut replacement = Actor::new(id, original.kind());
        self.registry
            .dispatch(&mut ActorEvent::Created { actor: &mut replacement });
        self.registry.dispatch(&mut ActorEvent::Replaced {
            original: &original,
            replacement: &mut replacement,
            cause,
        });

        if !cause.is_death() {
            replacement.load(&original.save());
        }

        debug!(target: "runtime", actor = %id, cause = cause.as_str(), "Actor replaced");

        Ok(self.actors.entry(id).or_insert(replacement))
    }

    /// Persists the capability data of one live actor.
    pub fn save(&self, id: ActorId) -> Result<()> {
        let actor = self.actor(id).ok_or(RuntimeError::ActorNotFound(id))?;
        self.repository.save(id, &actor.save())?;
        Ok(())
    }

    /// Persists every live actor, returning how many were saved.
    pub fn save_all(&self) -> Result<usize> {
        for (id, actor) in &self.actors {
            self.repository.save(*id, &actor.save())?;
        }
        Ok(self.actors.len())
    }

    /// Saves and removes a live actor.
    pub fn despawn(&mut self, id: ActorId) -> Result<Actor> {
        self.save(id)?;
        self.actors
            .remove(&id)
            .ok_or(RuntimeError::ActorNotFound(id))
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn repository(&self) -> &dyn ActorRepository {
        self.repository.as_ref()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}
