//! Conversion between stores and the persisted tag tree.
//!
//! Encoding walks every key of a store and emits one named node per key.
//! Decoding is pure: it builds a fresh store from the tree and returns a
//! [`DecodeError`] on the first malformed node, so a failed decode never
//! leaves a half-applied store behind. Applying the decoded value (and
//! absorbing the error) is the provider's job.

mod item_use;
mod latch;
mod need;
mod tag;

pub use tag::{Compound, Tag, TagKind};

use crate::config::NeedsConfig;
use crate::error::DecodeError;

/// Lossless mapping between a store and its tag-tree form.
pub trait StoreCodec: Sized {
    /// Emits the full contents of the store.
    fn encode(&self, config: &NeedsConfig) -> Compound;

    /// Builds a store from `tag`, visiting only the keys present in it.
    fn decode(tag: &Tag) -> Result<Self, DecodeError>;
}
