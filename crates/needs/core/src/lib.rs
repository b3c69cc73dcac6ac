//! Per-actor capability state for the needs system.
//!
//! `needs-core` defines the capability stores (need values with their level
//! adjustment log, boolean latches, item-use counters), the tag tree they are
//! persisted as, and the [`CapabilityProvider`] that binds one store to one
//! actor instance. Everything here is synchronous and performs no I/O; the
//! host-facing lifecycle and persistence live in `needs-runtime`.
pub mod capability;
pub mod codec;
pub mod config;
pub mod error;
pub mod store;

pub use capability::{Capability, CapabilityKind, CapabilityProvider, CapabilitySet, CapabilityStore};
pub use codec::{Compound, StoreCodec, Tag, TagKind};
pub use config::NeedsConfig;
pub use error::{DecodeError, ErrorSeverity, NeedsError};
pub use store::{ItemCounts, ItemUseState, LatchState, NeedState};
