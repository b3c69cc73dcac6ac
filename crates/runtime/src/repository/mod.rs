//! Persistence of per-actor capability data.
//!
//! Repositories store the tag tree produced by [`Actor::save`](crate::Actor::save)
//! and hand it back for [`Actor::load`](crate::Actor::load). They never look
//! inside the tree; decoding and its failure policy belong to the providers.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileActorRepository;
pub use memory::InMemoryActorRepository;
pub use traits::ActorRepository;

use needs_core::Compound;

/// Renders a capability tree as pretty-printed JSON for inspection.
pub fn render_json(data: &Compound) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| RepositoryError::Json(e.to_string()))
}
