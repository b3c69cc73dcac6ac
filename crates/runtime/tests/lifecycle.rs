//! End-to-end actor lifecycle: spawn, mutate, die, respawn, save, reload.

use std::sync::Arc;

use needs_core::{
    CapabilityKind, CapabilitySet, Compound, ItemUseState, LatchState, NeedState, NeedsConfig, Tag,
};
use needs_runtime::{
    ActorId, ActorKind, ActorRepository, FileActorRepository, HandlerRegistry,
    InMemoryActorRepository, ReplacementCause, Runtime, RuntimeConfig, RuntimeError,
};
use tempfile::TempDir;

const PLAYER: ActorId = ActorId(1);

fn runtime() -> Runtime {
    Runtime::new(
        HandlerRegistry::default(),
        Arc::new(InMemoryActorRepository::new()),
    )
}

fn populate(runtime: &mut Runtime) {
    let actor = runtime.actor_mut(PLAYER).unwrap();

    let needs = actor.capability_mut::<NeedState>().unwrap();
    needs.set("hunger", 3.5);
    needs.store_adjustment("hunger", "2", 1.0);

    actor
        .capability_mut::<LatchState>()
        .unwrap()
        .set("seen_tutorial", true);

    actor
        .capability_mut::<ItemUseState>()
        .unwrap()
        .bucket_mut("tools")
        .insert("axe".to_string(), 4);
}

#[test]
fn death_replacement_transplants_all_state() {
    let mut runtime = runtime();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    populate(&mut runtime);

    let actor = runtime.replace(PLAYER, ReplacementCause::Death).unwrap();

    let needs = actor.require::<NeedState>().unwrap();
    assert_eq!(needs.get("hunger"), 3.5);
    assert_eq!(needs.level_adjustment("hunger", "2"), 1.0);
    assert!(actor.require::<LatchState>().unwrap().last_value("seen_tutorial"));
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
}

#[test]
fn dimension_change_continues_the_same_state() {
    let mut runtime = runtime();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    populate(&mut runtime);

    let actor = runtime
        .replace(PLAYER, ReplacementCause::DimensionChange)
        .unwrap();

    let needs = actor.require::<NeedState>().unwrap();
    assert_eq!(needs.get("hunger"), 3.5);
    assert_eq!(needs.level_adjustment("hunger", "2"), 1.0);
    assert!(actor.require::<LatchState>().unwrap().last_value("seen_tutorial"));
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
}

#[test]
fn dimension_change_then_despawn_keeps_saved_data() {
    let temp_dir = TempDir::new().unwrap();
    let config = RuntimeConfig {
        save_dir: temp_dir.path().to_path_buf(),
        ..RuntimeConfig::default()
    };

    let mut runtime = Runtime::from_config(&config).unwrap();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    populate(&mut runtime);
    runtime.save(PLAYER).unwrap();
    runtime
        .replace(PLAYER, ReplacementCause::DimensionChange)
        .unwrap();
    runtime.despawn(PLAYER).unwrap();

    let mut reloaded = Runtime::from_config(&config).unwrap();
    let actor = reloaded.spawn(PLAYER, ActorKind::Player).unwrap();

    assert_eq!(actor.require::<NeedState>().unwrap().get("hunger"), 3.5);
    assert!(actor.require::<LatchState>().unwrap().last_value("seen_tutorial"));
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
}

#[test]
fn repeated_deaths_do_not_duplicate_or_drift() {
    let mut runtime = runtime();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    populate(&mut runtime);

    for _ in 0..3 {
        runtime.replace(PLAYER, ReplacementCause::Death).unwrap();
    }

    let actor = runtime.actor(PLAYER).unwrap();
    assert_eq!(actor.providers().count(), 3);
    assert_eq!(actor.require::<NeedState>().unwrap().values().len(), 1);
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
}

#[test]
fn partial_capabilities_still_clone_the_rest() {
    let registry = HandlerRegistry::with_defaults(
        CapabilitySet::from_kinds([CapabilityKind::Need, CapabilityKind::ItemUse]),
        NeedsConfig::default(),
    );
    let mut runtime = Runtime::new(registry, Arc::new(InMemoryActorRepository::new()));
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    {
        let actor = runtime.actor_mut(PLAYER).unwrap();
        actor.capability_mut::<NeedState>().unwrap().set("hunger", 3.5);
        actor
            .capability_mut::<ItemUseState>()
            .unwrap()
            .increment("tools", "axe");
    }

    let actor = runtime.replace(PLAYER, ReplacementCause::Death).unwrap();

    assert!(actor.capability::<LatchState>().is_none());
    assert_eq!(actor.require::<NeedState>().unwrap().get("hunger"), 3.5);
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 1);
}

#[test]
fn npcs_get_no_capabilities_by_default() {
    let mut runtime = runtime();
    let npc = runtime.spawn(ActorId(40), ActorKind::Npc).unwrap();

    assert_eq!(npc.providers().count(), 0);
    assert!(matches!(
        npc.require::<NeedState>(),
        Err(RuntimeError::MissingCapability { .. })
    ));
}

#[test]
fn spawn_twice_and_replace_unknown_are_rejected() {
    let mut runtime = runtime();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();

    assert!(matches!(
        runtime.spawn(PLAYER, ActorKind::Player),
        Err(RuntimeError::ActorAlreadySpawned(PLAYER))
    ));
    assert!(matches!(
        runtime.replace(ActorId(99), ReplacementCause::Death),
        Err(RuntimeError::ActorNotFound(ActorId(99)))
    ));
}

#[test]
fn despawn_then_spawn_restores_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = RuntimeConfig {
        save_dir: temp_dir.path().to_path_buf(),
        ..RuntimeConfig::default()
    };

    let mut runtime = Runtime::from_config(&config).unwrap();
    runtime.spawn(PLAYER, ActorKind::Player).unwrap();
    populate(&mut runtime);
    runtime.despawn(PLAYER).unwrap();
    assert!(runtime.actor(PLAYER).is_none());

    let mut reloaded = Runtime::from_config(&config).unwrap();
    let actor = reloaded.spawn(PLAYER, ActorKind::Player).unwrap();

    assert_eq!(actor.require::<NeedState>().unwrap().get("hunger"), 3.5);
    assert_eq!(
        actor.require::<NeedState>().unwrap().level_adjustment("hunger", "2"),
        1.0
    );
    assert!(actor.require::<LatchState>().unwrap().last_value("seen_tutorial"));
    assert_eq!(actor.require::<ItemUseState>().unwrap().count("tools", "axe"), 4);
}

#[test]
fn corrupt_capability_entry_is_absorbed_on_spawn() {
    let repository = Arc::new(InMemoryActorRepository::new());
    let mut latches = Compound::new();
    latches.put("seen_tutorial", 1.5_f64);
    let mut needs = Compound::new();
    needs.put("hunger", 2.0_f64);
    let mut data = Compound::new();
    data.put("needs:latched", latches);
    data.put("needs:custom_needs", needs);
    data.put("needs:item_used_count", Tag::Bool(false));
    repository.save(PLAYER, &data).unwrap();

    let mut runtime = Runtime::new(HandlerRegistry::default(), repository);
    let actor = runtime.spawn(PLAYER, ActorKind::Player).unwrap();

    assert_eq!(actor.require::<NeedState>().unwrap().get("hunger"), 2.0);
    assert!(actor.require::<LatchState>().unwrap().is_empty());
    assert!(actor.require::<ItemUseState>().unwrap().is_empty());
}

#[test]
fn unreadable_save_file_starts_actor_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("actor_1.bin"), b"not bincode").unwrap();
    let repository = FileActorRepository::new(temp_dir.path()).unwrap();

    let mut runtime = Runtime::new(HandlerRegistry::default(), Arc::new(repository));
    let actor = runtime.spawn(PLAYER, ActorKind::Player).unwrap();

    assert!(actor.providers().all(|p| p.serialize().is_empty()));
}
