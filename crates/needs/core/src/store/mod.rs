//! Capability stores: the per-actor state each capability kind owns.
//!
//! Stores are plain containers. They never fail, never validate keys (the
//! empty string is a legal key) and return a fixed default for unknown keys.
//! Mutation goes through their own methods only.

mod item_use;
mod latch;
mod need;

pub use item_use::{ItemCounts, ItemUseState};
pub use latch::LatchState;
pub use need::NeedState;
