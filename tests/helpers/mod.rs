use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use notify_notes::domain::{Note, NoteId};
use notify_notes::infrastructure::JsonFileCache;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a cache directory that lives as long as the test
#[allow(dead_code)]
pub struct TestCache {
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

#[allow(dead_code)]
impl TestCache {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let dir = temp_dir.path().join("cache");

        Ok(Self {
            _temp_dir: temp_dir,
            dir,
        })
    }

    /// Open a cache over this directory
    pub fn open(&self) -> JsonFileCache {
        JsonFileCache::new(&self.dir, 1000)
    }
}

/// Note with a creation time on the given day of January 2024
#[allow(dead_code)]
pub fn dated_note(id: &str, content: &str, day: u32) -> Note {
    Note {
        id: NoteId::from(id),
        title: format!("Note {id}"),
        content: content.to_string(),
        color: Some("#ffe666".to_string()),
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap()),
    }
}

/// Server-shaped JSON for a note, Mongo style
#[allow(dead_code)]
pub fn server_note_json(id: &str, title: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "content": content,
        "color": "#f6cebf",
        "createdAt": "2024-01-15T08:00:00.000Z",
    })
}

/// Run blocking client code off the async test runtime
#[allow(dead_code)]
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("Blocking task panicked")
}
