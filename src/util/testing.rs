// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteCache, NoteRepository};
use crate::domain::{CollectionKind, DomainError, Note, NoteCollections, NoteDraft, NoteId};

/// Plain note with the given id and content, no color, no timestamp
pub fn test_note(id: &str, content: &str) -> Note {
    Note {
        id: NoteId::from(id),
        title: format!("Note {id}"),
        content: content.to_string(),
        color: None,
        created_at: None,
    }
}

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Behaves like a tiny in-memory server: created notes show up in later
/// `list_notes` calls, deleted ones disappear. Failures can be configured
/// per operation and per id.
///
/// # Examples
///
/// ```
/// use notify_notes::util::testing::{test_note, MockNoteRepository};
/// use notify_notes::domain::NoteId;
///
/// let mock = MockNoteRepository::builder()
///     .with_server_note(test_note("1", "Buy milk"))
///     .with_delete_failure(NoteId::from("1"))
///     .build();
/// ```
pub struct MockNoteRepository {
    server_notes: Vec<Note>,
    search_results: HashMap<String, Vec<Note>>,
    fail_list: bool,
    fail_create: bool,
    fail_delete: HashSet<NoteId>,
    fail_update: HashSet<NoteId>,
    fail_archive: HashSet<NoteId>,
    next_id: u64,
    list_calls: usize,
    create_calls: usize,
    update_calls: usize,
    archive_calls: usize,
    search_calls: usize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls
    }

    pub fn archive_calls(&self) -> usize {
        self.archive_calls
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls
    }

    fn unavailable(op: &str) -> DomainError {
        DomainError::Remote(format!("{op}: 503 Service Unavailable"))
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.list_calls += 1;
        if self.fail_list {
            return Err(Self::unavailable("list"));
        }
        Ok(self.server_notes.clone())
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.create_calls += 1;
        if self.fail_create {
            return Err(Self::unavailable("create"));
        }

        self.next_id += 1;
        let note = Note {
            id: NoteId::new(format!("srv-{}", self.next_id)),
            title: draft.title.clone(),
            content: draft.content.clone(),
            color: Some(draft.color.clone()),
            created_at: Some(chrono::Utc::now()),
        };
        self.server_notes.push(note.clone());
        Ok(note)
    }

    fn update_note(
        &mut self,
        id: &NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, DomainError> {
        self.update_calls += 1;
        if self.fail_update.contains(id) {
            return Err(Self::unavailable("update"));
        }

        let mut note = self
            .server_notes
            .iter()
            .find(|n| &n.id == id)
            .cloned()
            .unwrap_or_else(|| test_note(id.as_str(), ""));
        note.title = title.to_string();
        note.content = content.to_string();
        Ok(note)
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        if self.fail_delete.contains(id) {
            return Err(Self::unavailable("delete"));
        }
        self.server_notes.retain(|n| &n.id != id);
        Ok(())
    }

    fn archive_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.archive_calls += 1;
        if self.fail_archive.contains(id) {
            return Err(Self::unavailable("archive"));
        }
        Ok(())
    }

    fn search_notes(&mut self, query: &str) -> Result<Vec<Note>, DomainError> {
        self.search_calls += 1;

        if let Some(results) = self.search_results.get(query) {
            return Ok(results.clone());
        }

        // Default behavior: substring match on title or content
        Ok(self
            .server_notes
            .iter()
            .filter(|n| n.title.contains(query) || n.content.contains(query))
            .cloned()
            .collect())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    server_notes: Vec<Note>,
    search_results: HashMap<String, Vec<Note>>,
    fail_list: bool,
    fail_create: bool,
    fail_delete: HashSet<NoteId>,
    fail_update: HashSet<NoteId>,
    fail_archive: HashSet<NoteId>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            server_notes: vec![],
            search_results: HashMap::new(),
            fail_list: false,
            fail_create: false,
            fail_delete: HashSet::new(),
            fail_update: HashSet::new(),
            fail_archive: HashSet::new(),
        }
    }

    /// Add a note the server returns from list_notes
    pub fn with_server_note(mut self, note: Note) -> Self {
        self.server_notes.push(note);
        self
    }

    /// Configure the result of search_notes for a specific query
    pub fn with_search_result(mut self, query: &str, results: Vec<Note>) -> Self {
        self.search_results.insert(query.to_string(), results);
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_create_failure(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn with_delete_failure(mut self, id: NoteId) -> Self {
        self.fail_delete.insert(id);
        self
    }

    pub fn with_update_failure(mut self, id: NoteId) -> Self {
        self.fail_update.insert(id);
        self
    }

    pub fn with_archive_failure(mut self, id: NoteId) -> Self {
        self.fail_archive.insert(id);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            server_notes: self.server_notes,
            search_results: self.search_results,
            fail_list: self.fail_list,
            fail_create: self.fail_create,
            fail_delete: self.fail_delete,
            fail_update: self.fail_update,
            fail_archive: self.fail_archive,
            next_id: 0,
            list_calls: 0,
            create_calls: 0,
            update_calls: 0,
            archive_calls: 0,
            search_calls: 0,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory NoteCache keyed like the on-disk cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, Vec<Note>>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryCache {
    pub fn with_collections(active: Vec<Note>, archived: Vec<Note>, trashed: Vec<Note>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(CollectionKind::Active.storage_key().to_string(), active);
        entries.insert(CollectionKind::Archived.storage_key().to_string(), archived);
        entries.insert(CollectionKind::Trashed.storage_key().to_string(), trashed);
        Self {
            entries,
            saves: 0,
            fail_saves: false,
        }
    }

    /// Make every following save fail
    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl NoteCache for MemoryCache {
    fn load(&self, key: &str) -> Vec<Note> {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    fn save(&mut self, collections: &NoteCollections) -> Result<(), DomainError> {
        if self.fail_saves {
            return Err(DomainError::Cache("disk full".to_string()));
        }
        for kind in CollectionKind::ALL {
            self.entries
                .insert(kind.storage_key().to_string(), collections.get(kind).to_vec());
        }
        self.saves += 1;
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
