//! Actor lifecycle and persistence for needs capabilities.
//!
//! The host drives this crate through [`Runtime`]: it reports actor creation
//! and replacement, and asks for saves. Capability providers are attached by
//! [`handlers::AttachHandler`], transplanted on death by
//! [`handlers::CloneHandler`], and persisted through an
//! [`repository::ActorRepository`].
pub mod actor;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod repository;
mod runtime;

pub use actor::{Actor, ActorId, ActorKind};
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{ActorEvent, ReplacementCause};
pub use handlers::{
    ActorEventHandler, AttachHandler, CloneHandler, CloneReport, HandlerRegistry,
    clone_capabilities,
};
pub use repository::{
    ActorRepository, FileActorRepository, InMemoryActorRepository, RepositoryError,
};
pub use runtime::Runtime;
