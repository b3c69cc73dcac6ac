//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use needs_core::{CapabilitySet, NeedsConfig};

/// Configuration required to build a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub needs: NeedsConfig,
    pub capabilities: CapabilitySet,
    pub attach_non_players: bool,
    pub save_dir: PathBuf,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NEEDS_SAVE_DIR` - Directory for actor save files (default: platform data dir)
    /// - `NEEDS_PERSIST_ZERO_ADJUSTMENTS` - Write zero level adjustments (default: false)
    /// - `NEEDS_ATTACH_NON_PLAYERS` - Attach capabilities to non-player actors (default: false)
    /// - `NEEDS_CAPABILITIES` - Comma-separated capability ids to attach (default: all)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("NEEDS_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(enable) = read_env::<bool>("NEEDS_PERSIST_ZERO_ADJUSTMENTS") {
            config.needs.persist_zero_adjustments = enable;
        }

        if let Some(enable) = read_env::<bool>("NEEDS_ATTACH_NON_PLAYERS") {
            config.attach_non_players = enable;
        }

        if let Ok(ids) = env::var("NEEDS_CAPABILITIES") {
            config.capabilities = CapabilitySet::from_ids(ids.split(','));
        }

        config
    }

    /// Platform data directory for saves, or `./saves` when none is known.
    pub fn default_save_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "needs")
            .map(|dirs| dirs.data_dir().join("actors"))
            .unwrap_or_else(|| PathBuf::from("saves"))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            needs: NeedsConfig::default(),
            capabilities: CapabilitySet::all(),
            attach_non_players: false,
            save_dir: Self::default_save_dir(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
