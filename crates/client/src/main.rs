//! Needs demo binary.
//!
//! Walks one player through a scripted life: spawn, accumulate state, save,
//! die, respawn, change dimension, and despawn. Each stage prints the
//! capability tree as JSON on stdout; logs go to stderr.
//!
//! ```bash
//! RUST_LOG=debug NEEDS_SAVE_DIR=/tmp/needs cargo run -p needs-client
//! ```

use anyhow::Result;
use needs_core::{ItemUseState, LatchState, NeedState};
use needs_runtime::repository::render_json;
use needs_runtime::{Actor, ActorId, ActorKind, ReplacementCause, Runtime, RuntimeConfig};

const PLAYER: ActorId = ActorId(1);

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let mut runtime = Runtime::from_config(&config)?;

    let actor = runtime.spawn(PLAYER, ActorKind::Player)?;
    print_stage("spawned", actor)?;

    live(actor);
    print_stage("after play", actor)?;
    runtime.save(PLAYER)?;

    let actor = runtime.replace(PLAYER, ReplacementCause::Death)?;
    print_stage("respawned after death", actor)?;

    let actor = runtime.replace(PLAYER, ReplacementCause::DimensionChange)?;
    print_stage("after dimension change", actor)?;

    runtime.despawn(PLAYER)?;
    tracing::info!(save_dir = %config.save_dir.display(), "Player despawned and saved");

    Ok(())
}

/// Mutates whichever capabilities the player carries.
fn live(actor: &mut Actor) {
    if let Some(needs) = actor.capability_mut::<NeedState>() {
        let hunger = needs.get("hunger");
        needs.set("hunger", hunger + 2.5);
        needs.set("thirst", 7.0);
        needs.store_adjustment("hunger", "2", -0.5);
    }

    if let Some(latches) = actor.capability_mut::<LatchState>() {
        latches.set("seen_tutorial", true);
    }

    if let Some(counters) = actor.capability_mut::<ItemUseState>() {
        counters.increment("tools", "axe");
        counters.increment("food", "bread");
    }
}

fn print_stage(stage: &str, actor: &Actor) -> Result<()> {
    println!("== {stage} ({})", actor.id());
    println!("{}", render_json(&actor.save())?);
    Ok(())
}
