//! File-based ActorRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use needs_core::Compound;

use super::{ActorRepository, RepositoryError, Result};
use crate::actor::ActorId;

/// File-based implementation of ActorRepository.
///
/// Stores each actor's capability tree as `actor_{id}.bin` in bincode format.
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-save leaves the previous save intact.
pub struct FileActorRepository {
    base_dir: PathBuf,
}

impl FileActorRepository {
    /// Create a new file-based actor repository, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to an actor's save file.
    fn actor_path(&self, actor: ActorId) -> PathBuf {
        self.base_dir.join(format!("actor_{}.bin", actor.0))
    }
}

impl ActorRepository for FileActorRepository {
    fn save(&self, actor: ActorId, data: &Compound) -> Result<()> {
        let path = self.actor_path(actor);
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(data).map_err(|e| RepositoryError::Serialization {
            actor,
            reason: e.to_string(),
        })?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(
            target: "runtime::repository",
            actor = %actor,
            path = %path.display(),
            "Saved actor capabilities"
        );

        Ok(())
    }

    fn load(&self, actor: ActorId) -> Result<Option<Compound>> {
        let path = self.actor_path(actor);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let data: Compound = bincode::deserialize(&bytes).map_err(|e| {
            RepositoryError::CorruptedData {
                actor,
                reason: format!("{}: {}", path.display(), e),
            }
        })?;

        tracing::debug!(
            target: "runtime::repository",
            actor = %actor,
            path = %path.display(),
            "Loaded actor capabilities"
        );

        Ok(Some(data))
    }

    fn exists(&self, actor: ActorId) -> bool {
        self.actor_path(actor).exists()
    }

    fn delete(&self, actor: ActorId) -> Result<()> {
        let path = self.actor_path(actor);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(target: "runtime::repository", actor = %actor, "Deleted actor save");
        }

        Ok(())
    }

    fn list_actors(&self) -> Result<Vec<ActorId>> {
        let mut actors = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("actor_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(id) = id.parse::<u64>()
            {
                actors.push(ActorId(id));
            }
        }

        actors.sort_unstable();
        Ok(actors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use needs_core::Tag;
    use tempfile::TempDir;

    fn sample() -> Compound {
        let mut latches = Compound::new();
        latches.put("seen_tutorial", true);
        let mut need = Compound::new();
        need.put("current", 0.1_f64);
        let mut needs = Compound::new();
        needs.put("hunger", need);

        let mut root = Compound::new();
        root.put("needs:latched", latches);
        root.put("needs:custom_needs", needs);
        root
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();

        repo.save(ActorId(3), &sample()).unwrap();

        assert!(repo.exists(ActorId(3)));
        assert_eq!(repo.load(ActorId(3)).unwrap(), Some(sample()));
    }

    #[test]
    fn load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();

        assert_eq!(repo.load(ActorId(9)).unwrap(), None);
        assert!(!repo.exists(ActorId(9)));
    }

    #[test]
    fn save_overwrites_previous_entry() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();

        repo.save(ActorId(1), &sample()).unwrap();
        repo.save(ActorId(1), &Compound::new()).unwrap();

        assert_eq!(repo.load(ActorId(1)).unwrap(), Some(Compound::new()));
        assert!(!temp_dir.path().join("actor_1.bin.tmp").exists());
    }

    #[test]
    fn delete_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();

        for id in [5, 1, 3] {
            repo.save(ActorId(id), &sample()).unwrap();
        }
        fs::write(temp_dir.path().join("notes.txt"), b"ignored").unwrap();

        assert_eq!(
            repo.list_actors().unwrap(),
            [ActorId(1), ActorId(3), ActorId(5)]
        );

        repo.delete(ActorId(3)).unwrap();
        repo.delete(ActorId(3)).unwrap();
        assert_eq!(repo.list_actors().unwrap(), [ActorId(1), ActorId(5)]);
    }

    #[test]
    fn garbage_file_is_reported_as_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("actor_4.bin"), [0xff_u8; 3]).unwrap();

        let err = repo.load(ActorId(4)).unwrap_err();
        assert!(matches!(err, RepositoryError::CorruptedData { actor: ActorId(4), .. }));
    }

    #[test]
    fn scalar_leaves_survive_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileActorRepository::new(temp_dir.path()).unwrap();
        let mut root = Compound::new();
        root.put("third", 1.0_f64 / 3.0);
        root.put("big", i64::MAX);

        repo.save(ActorId(2), &root).unwrap();
        let loaded = repo.load(ActorId(2)).unwrap().unwrap();

        assert_eq!(loaded.get("third"), Some(&Tag::Double(1.0 / 3.0)));
        assert_eq!(loaded.get("big"), Some(&Tag::Int(i64::MAX)));
    }
}
