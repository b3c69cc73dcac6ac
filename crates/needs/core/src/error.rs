//! Common error infrastructure for needs-core.
//!
//! Domain-specific errors (e.g. [`DecodeError`]) are defined next to the code
//! that produces them and implement [`NeedsError`] so callers can classify them
//! uniformly.

use crate::codec::TagKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the host keeps running; the affected store is left as-is
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: unrecoverable, the actor state cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - logged and absorbed at the boundary that saw it.
    ///
    /// Examples: corrupt save data, wrong leaf type in a persisted tree
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - actor state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all needs-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait NeedsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors produced while decoding a persisted tag tree into a store.
///
/// Decoding is all-or-nothing: when any of these is returned the target
/// store has not been touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The root (or a nested node that must be a sub-tree) is a bare leaf.
    #[error("expected a compound at `{path}`, found {found}")]
    NotACompound {
        /// Dotted path of the offending node (empty for the root).
        path: String,
        /// Kind of tag actually present.
        found: TagKind,
    },

    /// A leaf was present but carried the wrong type.
    #[error("expected {expected} at `{path}`, found {found}")]
    UnexpectedTag {
        /// Dotted path of the offending leaf.
        path: String,
        /// Kind of tag the codec requires at this position.
        expected: TagKind,
        /// Kind of tag actually present.
        found: TagKind,
    },

    /// An integer leaf does not fit the counter range.
    #[error("count {value} at `{path}` is out of range")]
    CountOutOfRange {
        /// Dotted path of the offending leaf.
        path: String,
        /// Raw value read from the tree.
        value: i64,
    },
}

impl DecodeError {
    /// Prefixes the error path with the given parent key.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}.{path}")
            }
        };

        match self {
            Self::NotACompound { path, found } => Self::NotACompound {
                path: join(path),
                found,
            },
            Self::UnexpectedTag {
                path,
                expected,
                found,
            } => Self::UnexpectedTag {
                path: join(path),
                expected,
                found,
            },
            Self::CountOutOfRange { path, value } => Self::CountOutOfRange {
                path: join(path),
                value,
            },
        }
    }

    /// Dotted path of the node that failed to decode.
    pub fn path(&self) -> &str {
        match self {
            Self::NotACompound { path, .. }
            | Self::UnexpectedTag { path, .. }
            | Self::CountOutOfRange { path, .. } => path,
        }
    }
}

impl NeedsError for DecodeError {
    fn severity(&self) -> ErrorSeverity {
        // Corrupt save data must never take the host down.
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotACompound { .. } => "DECODE_NOT_A_COMPOUND",
            Self::UnexpectedTag { .. } => "DECODE_UNEXPECTED_TAG",
            Self::CountOutOfRange { .. } => "DECODE_COUNT_OUT_OF_RANGE",
        }
    }
}
