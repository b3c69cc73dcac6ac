//! Unified error types surfaced by the runtime API.
use thiserror::Error;

use needs_core::{CapabilityKind, ErrorSeverity, NeedsError};

pub use crate::repository::RepositoryError;
use crate::actor::ActorId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("actor {0} is not spawned")]
    ActorNotFound(ActorId),

    #[error("actor {0} is already spawned")]
    ActorAlreadySpawned(ActorId),

    #[error("actor {actor} has no {kind} capability attached")]
    MissingCapability { actor: ActorId, kind: CapabilityKind },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl NeedsError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) | Self::ActorAlreadySpawned(_) => ErrorSeverity::Validation,
            Self::MissingCapability { .. } => ErrorSeverity::Validation,
            Self::Repository(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "RUNTIME_ACTOR_NOT_FOUND",
            Self::ActorAlreadySpawned(_) => "RUNTIME_ACTOR_ALREADY_SPAWNED",
            Self::MissingCapability { .. } => "RUNTIME_MISSING_CAPABILITY",
            Self::Repository(err) => err.error_code(),
        }
    }
}
