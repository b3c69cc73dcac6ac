//! Provider binding one store to one actor instance.
//!
//! A provider is created empty when its actor is created and dies with it.
//! Nothing is shared across actor instances; a replacement actor gets fresh
//! providers which the lifecycle cloner populates.

use tracing::{error, trace};

use super::{Capability, CapabilityKind, CapabilityStore};
use crate::codec::{Compound, Tag};
use crate::config::NeedsConfig;
use crate::error::{DecodeError, NeedsError};

/// Sole owner of one capability store for one actor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityProvider {
    kind: CapabilityKind,
    store: CapabilityStore,
    config: NeedsConfig,
}

impl CapabilityProvider {
    /// Creates a provider with an empty store for `kind`.
    pub fn new(kind: CapabilityKind) -> Self {
        Self::with_config(kind, NeedsConfig::default())
    }

    pub fn with_config(kind: CapabilityKind, config: NeedsConfig) -> Self {
        Self {
            kind,
            store: CapabilityStore::empty(kind),
            config,
        }
    }

    /// Capability kind this provider answers for.
    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// Returns the store only if `kind` is this provider's capability.
    pub fn query(&self, kind: CapabilityKind) -> Option<&CapabilityStore> {
        (kind == self.kind).then_some(&self.store)
    }

    /// Mutable counterpart of [`query`](Self::query).
    pub fn query_mut(&mut self, kind: CapabilityKind) -> Option<&mut CapabilityStore> {
        if kind == self.kind {
            Some(&mut self.store)
        } else {
            None
        }
    }

    /// Typed query, e.g. `provider.get::<NeedState>()`.
    pub fn get<C: Capability>(&self) -> Option<&C> {
        self.query(C::KIND).and_then(C::from_store)
    }

    pub fn get_mut<C: Capability>(&mut self) -> Option<&mut C> {
        self.query_mut(C::KIND).and_then(C::from_store_mut)
    }

    /// Encodes the wrapped store.
    pub fn serialize(&self) -> Compound {
        self.store.encode(&self.config)
    }

    /// Restores the store from persisted data.
    ///
    /// Malformed data is logged and otherwise ignored: the store is left
    /// exactly as it was.
    pub fn deserialize(&mut self, tag: &Tag) {
        if let Err(err) = self.try_deserialize(tag) {
            error!(
                target: "needs::provider",
                capability = %self.kind,
                code = err.error_code(),
                error = %err,
                "Unable to deserialize capability data; keeping current store"
            );
        }
    }

    /// Like [`deserialize`](Self::deserialize) but hands the error back.
    pub fn try_deserialize(&mut self, tag: &Tag) -> Result<(), DecodeError> {
        self.store.decode_into(tag)?;
        trace!(
            target: "needs::provider",
            capability = %self.kind,
            "Deserialized capability data"
        );
        Ok(())
    }
}
