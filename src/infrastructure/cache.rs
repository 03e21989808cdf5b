// src/infrastructure/cache.rs
use crate::application::NoteCache;
use crate::domain::{CollectionKind, DomainError, Note, NoteCollections};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Stores each collection as `<dir>/<key>.json`.
///
/// Collections longer than `capacity` are cut to their most recent entries
/// on save; the server stays the record of truth.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
    capacity: usize,
}

impl JsonFileCache {
    pub fn new(dir: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            capacity,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn bounded<'a>(&self, key: &str, notes: &'a [Note]) -> &'a [Note] {
        if notes.len() <= self.capacity {
            return notes;
        }
        let dropped = notes.len() - self.capacity;
        warn!(key, dropped, capacity = self.capacity, "Cache capacity exceeded, dropping oldest notes");
        &notes[dropped..]
    }

    /// Serialize into a temp file in the cache directory, ready to be renamed over the target
    fn stage(&self, key: &str, notes: &[Note]) -> Result<NamedTempFile, DomainError> {
        let json = serde_json::to_string(notes)
            .map_err(|e| DomainError::Cache(format!("Failed to serialize {key}: {e}")))?;

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| DomainError::Cache(format!("Failed to create temp file: {e}")))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| DomainError::Cache(format!("Failed to write {key}: {e}")))?;
        Ok(tmp)
    }
}

impl NoteCache for JsonFileCache {
    fn load(&self, key: &str) -> Vec<Note> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!(?path, "No cached data");
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(?path, error = %e, "Error reading {key} from cache");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(?path, error = %e, "Error parsing {key} from cache");
                Vec::new()
            }
        }
    }

    fn save(&mut self, collections: &NoteCollections) -> Result<(), DomainError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Cache(format!("Failed to create cache directory: {e}")))?;

        let mut staged = Vec::with_capacity(CollectionKind::ALL.len());
        for kind in CollectionKind::ALL {
            let key = kind.storage_key();
            let notes = self.bounded(key, collections.get(kind));
            staged.push((key, self.stage(key, notes)?));
        }

        // Notes only move active -> archive -> trash. Persisting trash first
        // leaves an interrupted move duplicated on disk instead of missing.
        for (key, tmp) in staged.into_iter().rev() {
            tmp.persist(self.path_for(key))
                .map_err(|e| DomainError::Cache(format!("Failed to replace {key}: {e}")))?;
        }
        debug!(dir = ?self.dir, "Saved collections to cache");
        Ok(())
    }
}
