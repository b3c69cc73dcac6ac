//! Actor instances as seen from the capability layer.
//!
//! The host owns actor identity and everything else about an actor; this
//! type only carries the identity needed for logging and the providers that
//! were attached to this particular instance.

use std::fmt;

use needs_core::{Capability, CapabilityKind, CapabilityProvider, CapabilityStore, Compound, Tag};

use crate::error::{Result, RuntimeError};

/// Host-assigned actor identifier. Stable across death and respawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of simulated entity. Only players carry capabilities by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Npc,
}

/// One actor instance and the capability providers attached to it.
#[derive(Clone, Debug)]
pub struct Actor {
    id: ActorId,
    kind: ActorKind,
    providers: Vec<CapabilityProvider>,
}

impl Actor {
    /// Creates an instance with no providers attached yet.
    pub fn new(id: ActorId, kind: ActorKind) -> Self {
        Self {
            id,
            kind,
            providers: Vec::new(),
        }
    }

    pub fn player(id: ActorId) -> Self {
        Self::new(id, ActorKind::Player)
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }

    /// Attaches a provider. The host dispatches creation once per instance,
    /// so each kind is attached at most once.
    pub fn attach(&mut self, provider: CapabilityProvider) {
        self.providers.push(provider);
    }

    pub fn providers(&self) -> impl Iterator<Item = &CapabilityProvider> + '_ {
        self.providers.iter()
    }

    /// Asks every attached provider in turn; the first one that accepts
    /// `kind` answers.
    pub fn query(&self, kind: CapabilityKind) -> Option<&CapabilityStore> {
        self.providers.iter().find_map(|p| p.query(kind))
    }

    pub fn query_mut(&mut self, kind: CapabilityKind) -> Option<&mut CapabilityStore> {
        self.providers.iter_mut().find_map(|p| p.query_mut(kind))
    }

    pub fn has_capability(&self, kind: CapabilityKind) -> bool {
        self.query(kind).is_some()
    }

    /// Typed lookup, e.g. `actor.capability::<NeedState>()`.
    pub fn capability<C: Capability>(&self) -> Option<&C> {
        self.query(C::KIND).and_then(C::from_store)
    }

    pub fn capability_mut<C: Capability>(&mut self) -> Option<&mut C> {
        self.query_mut(C::KIND).and_then(C::from_store_mut)
    }

    /// Typed lookup for callers that cannot proceed without the capability.
    pub fn require<C: Capability>(&self) -> Result<&C> {
        self.capability::<C>()
            .ok_or(RuntimeError::MissingCapability {
                actor: self.id,
                kind: C::KIND,
            })
    }

    pub fn require_mut<C: Capability>(&mut self) -> Result<&mut C> {
        let actor = self.id;
        self.capability_mut::<C>()
            .ok_or(RuntimeError::MissingCapability {
                actor,
                kind: C::KIND,
            })
    }

    /// Persisted form: one sub-tree per provider, keyed by capability id.
    pub fn save(&self) -> Compound {
        let mut root = Compound::new();
        for provider in &self.providers {
            root.put(provider.kind().id(), provider.serialize());
        }
        root
    }

    /// Restores every attached provider whose id is present in `data`.
    ///
    /// Entries for capabilities this instance does not carry are ignored.
    pub fn load(&mut self, data: &Compound) {
        for provider in &mut self.providers {
            let id = provider.kind().id();
            match data.get(&id) {
                Some(tag) => provider.deserialize(tag),
                None => tracing::trace!(
                    target: "runtime::actor",
                    actor = %self.id,
                    capability = %id,
                    "No saved data for capability"
                ),
            }
        }
    }

    /// Like [`load`](Self::load) but for a root that may not be a compound.
    pub fn load_tag(&mut self, data: &Tag) {
        match data.as_compound() {
            Ok(root) => self.load(root),
            Err(err) => tracing::error!(
                target: "runtime::actor",
                actor = %self.id,
                error = %err,
                "Unable to load actor data; keeping current state"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use needs_core::{CapabilitySet, ItemUseState, LatchState, NeedState, NeedsConfig};

    fn with_all_capabilities() -> Actor {
        let mut actor = Actor::player(ActorId(1));
        for provider in CapabilitySet::all().providers(NeedsConfig::default()) {
            actor.attach(provider);
        }
        actor
    }

    #[test]
    fn query_composes_across_providers() {
        let actor = with_all_capabilities();

        assert_eq!(
            actor.query(CapabilityKind::Need).map(CapabilityStore::kind),
            Some(CapabilityKind::Need)
        );
        assert_eq!(
            actor.query(CapabilityKind::ItemUse).map(CapabilityStore::kind),
            Some(CapabilityKind::ItemUse)
        );
    }

    #[test]
    fn missing_capability_is_absent_not_an_error() {
        let mut actor = Actor::player(ActorId(2));
        actor.attach(CapabilityProvider::new(CapabilityKind::Need));

        assert!(actor.capability::<LatchState>().is_none());
        assert!(!actor.has_capability(CapabilityKind::Latch));
        assert!(matches!(
            actor.require::<LatchState>(),
            Err(RuntimeError::MissingCapability {
                kind: CapabilityKind::Latch,
                ..
            })
        ));
    }

    #[test]
    fn save_then_load_into_fresh_instance() {
        let mut actor = with_all_capabilities();
        actor.capability_mut::<NeedState>().unwrap().set("hunger", 3.5);
        actor
            .capability_mut::<LatchState>()
            .unwrap()
            .set("seen_tutorial", true);
        actor
            .capability_mut::<ItemUseState>()
            .unwrap()
            .bucket_mut("tools")
            .insert("axe".to_string(), 4);

        let saved = actor.save();
        assert!(saved.contains("needs:custom_needs"));
        assert!(saved.contains("needs:latched"));
        assert!(saved.contains("needs:item_used_count"));

        let mut restored = with_all_capabilities();
        restored.load(&saved);

        assert_eq!(restored.require::<NeedState>().unwrap().get("hunger"), 3.5);
        assert!(restored.require::<LatchState>().unwrap().last_value("seen_tutorial"));
        assert_eq!(restored.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
    }

    #[test]
    fn corrupt_capability_entry_only_affects_that_capability() {
        let mut source = with_all_capabilities();
        source.capability_mut::<NeedState>().unwrap().set("hunger", 2.0);
        let mut saved = source.save();
        saved.put("needs:latched", 12_i64);

        let mut restored = with_all_capabilities();
        restored.load(&saved);

        assert_eq!(restored.require::<NeedState>().unwrap().get("hunger"), 2.0);
        assert!(restored.require::<LatchState>().unwrap().is_empty());
    }

    #[test]
    fn load_tag_ignores_scalar_root() {
        let mut actor = with_all_capabilities();
        actor.load_tag(&Tag::Bool(true));

        assert!(actor.providers().all(|p| p.serialize().is_empty()));
    }
}
