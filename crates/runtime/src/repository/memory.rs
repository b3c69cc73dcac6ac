//! In-memory ActorRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use needs_core::Compound;

use super::{ActorRepository, RepositoryError, Result};
use crate::actor::ActorId;

/// In-memory implementation of ActorRepository.
pub struct InMemoryActorRepository {
    actors: RwLock<HashMap<ActorId, Compound>>,
}

impl InMemoryActorRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            actors: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryActorRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRepository for InMemoryActorRepository {
    fn save(&self, actor: ActorId, data: &Compound) -> Result<()> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        actors.insert(actor, data.clone());
        Ok(())
    }

    fn load(&self, actor: ActorId) -> Result<Option<Compound>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(actors.get(&actor).cloned())
    }

    fn exists(&self, actor: ActorId) -> bool {
        self.actors
            .read()
            .map(|actors| actors.contains_key(&actor))
            .unwrap_or(false)
    }

    fn delete(&self, actor: ActorId) -> Result<()> {
        let mut actors = self
            .actors
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        actors.remove(&actor);
        Ok(())
    }

    fn list_actors(&self) -> Result<Vec<ActorId>> {
        let actors = self
            .actors
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<ActorId> = actors.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
