use super::CapabilityKind;
use crate::codec::{Compound, StoreCodec, Tag};
use crate::config::NeedsConfig;
use crate::error::DecodeError;
use crate::store::{ItemUseState, LatchState, NeedState};

/// The store owned by a provider, one variant per capability kind.
#[derive(Clone, Debug, PartialEq)]
pub enum CapabilityStore {
    Need(NeedState),
    Latch(LatchState),
    ItemUse(ItemUseState),
}

impl CapabilityStore {
    /// Fresh, empty store matching `kind`.
    pub fn empty(kind: CapabilityKind) -> Self {
        match kind {
            CapabilityKind::Need => Self::Need(NeedState::new()),
            CapabilityKind::Latch => Self::Latch(LatchState::new()),
            CapabilityKind::ItemUse => Self::ItemUse(ItemUseState::new()),
        }
    }

    pub const fn kind(&self) -> CapabilityKind {
        match self {
            Self::Need(_) => CapabilityKind::Need,
            Self::Latch(_) => CapabilityKind::Latch,
            Self::ItemUse(_) => CapabilityKind::ItemUse,
        }
    }

    pub fn encode(&self, config: &NeedsConfig) -> Compound {
        match self {
            Self::Need(state) => state.encode(config),
            Self::Latch(state) => state.encode(config),
            Self::ItemUse(state) => state.encode(config),
        }
    }

    /// Decodes `tag` and applies every decoded entry through the store's setters.
    ///
    /// On error nothing is applied.
    pub fn decode_into(&mut self, tag: &Tag) -> Result<(), DecodeError> {
        match self {
            Self::Need(state) => state.merge_from(NeedState::decode(tag)?),
            Self::Latch(state) => state.merge_from(LatchState::decode(tag)?),
            Self::ItemUse(state) => state.merge_from(ItemUseState::decode(tag)?),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Need(state) => state.is_empty(),
            Self::Latch(state) => state.is_empty(),
            Self::ItemUse(state) => state.is_empty(),
        }
    }
}

/// Typed view of a [`CapabilityStore`] variant.
///
/// Lets callers write `provider.get::<LatchState>()` instead of matching on
/// the store enum; the kind check still happens first.
pub trait Capability: Sized {
    const KIND: CapabilityKind;

    fn from_store(store: &CapabilityStore) -> Option<&Self>;

    fn from_store_mut(store: &mut CapabilityStore) -> Option<&mut Self>;
}

macro_rules! impl_capability {
    ($state:ty, $kind:ident) => {
        impl Capability for $state {
            const KIND: CapabilityKind = CapabilityKind::$kind;

            fn from_store(store: &CapabilityStore) -> Option<&Self> {
                match store {
                    CapabilityStore::$kind(state) => Some(state),
                    _ => None,
                }
            }

            fn from_store_mut(store: &mut CapabilityStore) -> Option<&mut Self> {
                match store {
                    CapabilityStore::$kind(state) => Some(state),
                    _ => None,
                }
            }
        }
    };
}

impl_capability!(NeedState, Need);
impl_capability!(LatchState, Latch);
impl_capability!(ItemUseState, ItemUse);
