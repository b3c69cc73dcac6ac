//! Capability identity, the closed set of capability kinds, and providers.
//!
//! Every capability an actor can carry is one variant of [`CapabilityKind`].
//! A kind has a stable namespaced identifier (`needs:<path>`) used as the key
//! of its sub-tree in persisted actor data. The set of kinds to attach is
//! built once at startup as a [`CapabilitySet`] and passed explicitly to the
//! code that attaches providers.

mod provider;
mod store;

pub use provider::CapabilityProvider;
pub use store::{Capability, CapabilityStore};

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::config::NeedsConfig;

/// Identity of a capability kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum CapabilityKind {
    /// Need values and the per-level adjustment log.
    #[strum(serialize = "custom_needs")]
    Need,
    /// Boolean latches.
    #[strum(serialize = "latched")]
    Latch,
    /// Item-use counters.
    #[strum(serialize = "item_used_count")]
    ItemUse,
}

impl CapabilityKind {
    /// Path component of the identifier, without namespace.
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Fully qualified identifier, e.g. `needs:latched`.
    pub fn id(self) -> String {
        self.to_string()
    }

    /// Parses a fully qualified identifier. Other namespaces are rejected.
    pub fn from_id(id: &str) -> Option<Self> {
        let (namespace, path) = id.split_once(':')?;
        if namespace != NeedsConfig::NAMESPACE {
            return None;
        }
        Self::from_str(path).ok()
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", NeedsConfig::NAMESPACE, self.path())
    }
}

/// Explicit, ordered set of capability kinds to attach to new actors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilitySet {
    kinds: Vec<CapabilityKind>,
}

impl CapabilitySet {
    /// Every known capability kind.
    pub fn all() -> Self {
        Self {
            kinds: CapabilityKind::iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Builds a set from kinds, dropping duplicates.
    pub fn from_kinds(kinds: impl IntoIterator<Item = CapabilityKind>) -> Self {
        let mut kinds: Vec<_> = kinds.into_iter().collect();
        kinds.sort_unstable();
        kinds.dedup();
        Self { kinds }
    }

    /// Builds a set from identifiers; unknown identifiers are logged and skipped.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_kinds(ids.into_iter().filter_map(|id| {
            let kind = CapabilityKind::from_id(id.trim());
            if kind.is_none() {
                tracing::warn!(
                    target: "needs::capability",
                    id,
                    "Ignoring unknown capability identifier"
                );
            }
            kind
        }))
    }

    pub fn contains(&self, kind: CapabilityKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = CapabilityKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Constructs one fresh provider per kind in the set.
    pub fn providers(&self, config: NeedsConfig) -> impl Iterator<Item = CapabilityProvider> + '_ {
        self.iter()
            .map(move |kind| CapabilityProvider::with_config(kind, config))
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_namespaced() {
        assert_eq!(CapabilityKind::Need.id(), "needs:custom_needs");
        assert_eq!(CapabilityKind::Latch.id(), "needs:latched");
        assert_eq!(CapabilityKind::ItemUse.id(), "needs:item_used_count");
        for kind in CapabilityKind::iter() {
            assert_eq!(kind.to_string(), kind.id());
        }
        assert_eq!(CapabilityKind::Latch.to_string(), "needs:latched");
    }

    #[test]
    fn from_id_round_trips_and_rejects_foreign_ids() {
        for kind in CapabilityKind::iter() {
            assert_eq!(CapabilityKind::from_id(&kind.id()), Some(kind));
        }
        assert_eq!(CapabilityKind::from_id("other:latched"), None);
        assert_eq!(CapabilityKind::from_id("latched"), None);
        assert_eq!(CapabilityKind::from_id("needs:unknown"), None);
    }

    #[test]
    fn set_from_ids_skips_unknown_and_duplicates() {
        let set = CapabilitySet::from_ids(["needs:latched", "bogus", " needs:latched ", "needs:custom_needs"]);

        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [CapabilityKind::Need, CapabilityKind::Latch]
        );
        assert!(!set.contains(CapabilityKind::ItemUse));
    }

    #[test]
    fn all_contains_every_kind_once() {
        let set = CapabilitySet::all();
        assert_eq!(set.len(), 3);
        let providers: Vec<_> = set.providers(NeedsConfig::default()).map(|p| p.kind()).collect();
        assert_eq!(
            providers,
            [CapabilityKind::Need, CapabilityKind::Latch, CapabilityKind::ItemUse]
        );
    }
}
