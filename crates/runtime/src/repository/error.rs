//! Error types raised by repository implementations.

use needs_core::{ErrorSeverity, NeedsError};
use thiserror::Error;

use crate::actor::ActorId;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("actor save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode save for actor {actor}: {reason}")]
    Serialization { actor: ActorId, reason: String },

    #[error("failed to render capability tree as JSON: {0}")]
    Json(String),

    /// The stored bytes exist but do not decode to a capability tree.
    #[error("save for actor {actor} is corrupted: {reason}")]
    CorruptedData { actor: ActorId, reason: String },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl NeedsError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CorruptedData { .. } => ErrorSeverity::Recoverable,
            Self::Json(_) => ErrorSeverity::Validation,
            Self::Io(_) | Self::Serialization { .. } => ErrorSeverity::Internal,
            Self::LockPoisoned => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Serialization { .. } => "REPOSITORY_SERIALIZATION",
            Self::Json(_) => "REPOSITORY_JSON",
            Self::CorruptedData { .. } => "REPOSITORY_CORRUPTED_DATA",
        }
    }
}
