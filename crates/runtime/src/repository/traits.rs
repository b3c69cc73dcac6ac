//! Repository contract for saving and loading actor capability data.

use needs_core::Compound;

use super::Result;
use crate::actor::ActorId;

/// Repository for per-actor persisted capability trees.
///
/// One entry per actor id; saving again replaces the previous entry.
pub trait ActorRepository: Send + Sync {
    /// Save the capability tree of an actor
    fn save(&self, actor: ActorId, data: &Compound) -> Result<()>;

    /// Load the capability tree of an actor, if one was saved
    fn load(&self, actor: ActorId) -> Result<Option<Compound>>;

    /// Check if an entry exists
    fn exists(&self, actor: ActorId) -> bool;

    /// Delete an entry. Deleting a missing entry is not an error.
    fn delete(&self, actor: ActorId) -> Result<()>;

    /// List all actors with saved data, sorted by id
    fn list_actors(&self) -> Result<Vec<ActorId>> {
        Ok(vec![])
    }
}
