// src/application/collection_manager.rs
use crate::application::{NoteCache, NoteRepository, SearchDebouncer, SearchSequencer, SearchTicket};
use crate::domain::note::validate_fields;
use crate::domain::{
    sort_notes, CollectionKind, DomainError, Note, NoteCollections, NoteDraft, NoteId, SortKey,
};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Single source of truth for the three note collections and the filtered view.
///
/// Remote-backed operations call the repository first and only touch local
/// state once the server has confirmed. Every state change is written
/// through to the cache.
pub struct NoteCollectionManager<R: NoteRepository, C: NoteCache> {
    repository: R,
    cache: C,
    collections: NoteCollections,
    view: Vec<Note>,
    sort_key: Option<SortKey>,
    debouncer: SearchDebouncer,
    sequencer: SearchSequencer,
}

impl<R: NoteRepository, C: NoteCache> NoteCollectionManager<R, C> {
    /// Rehydrate the collections from the cache. No network traffic.
    pub fn open(repository: R, cache: C, debounce: Duration) -> Self {
        let mut collections = NoteCollections::new(
            cache.load(CollectionKind::Active.storage_key()),
            cache.load(CollectionKind::Archived.storage_key()),
            cache.load(CollectionKind::Trashed.storage_key()),
        );
        let dropped = collections.dedup();
        if dropped > 0 {
            warn!(dropped, "Cache held notes in more than one collection, keeping the furthest copy");
        }
        debug!(
            active = collections.active().len(),
            archived = collections.archived().len(),
            trashed = collections.trashed().len(),
            "Loaded cached collections"
        );

        let view = collections.active().to_vec();
        Self {
            repository,
            cache,
            collections,
            view,
            sort_key: None,
            debouncer: SearchDebouncer::new(debounce),
            sequencer: SearchSequencer::new(),
        }
    }

    pub fn active(&self) -> &[Note] {
        self.collections.active()
    }

    pub fn archived(&self) -> &[Note] {
        self.collections.archived()
    }

    pub fn trashed(&self) -> &[Note] {
        self.collections.trashed()
    }

    pub fn collection(&self, kind: CollectionKind) -> &[Note] {
        self.collections.get(kind)
    }

    pub fn collections(&self) -> &NoteCollections {
        &self.collections
    }

    /// The filtered, sorted view of the active collection
    pub fn view(&self) -> &[Note] {
        &self.view
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Replace the active collection with the server's list
    #[instrument(level = "debug", skip(self))]
    pub fn refresh(&mut self) -> Result<(), DomainError> {
        let notes = self.repository.list_notes().map_err(|e| {
            error!(error = %e, "Error fetching notes");
            e
        })?;

        let skipped = self.collections.replace_active(notes);
        if skipped > 0 {
            debug!(skipped, "Ignored server notes held in archive or trash");
        }
        info!(count = self.collections.active().len(), "Fetched notes");

        self.reset_view();
        self.persist();
        Ok(())
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn add(&mut self, title: &str, content: &str) -> Result<Note, DomainError> {
        let draft = NoteDraft::new(title, content)?;
        debug!(client_id = %draft.client_id, color = %draft.color, "Creating note");

        let confirmed = self.repository.create_note(&draft).map_err(|e| {
            error!(client_id = %draft.client_id, error = %e, "Error adding note");
            e
        })?;
        let note = draft.promote(confirmed);
        info!(note_id = %note.id, "Added note");

        self.collections.push_active(note.clone());
        self.reset_view();
        self.persist();

        if let Err(e) = self.refresh() {
            warn!(error = %e, "Refetch after add failed, keeping local copy");
        }
        Ok(note)
    }

    /// Delete a note on the server, then drop it from whichever collection holds it
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.repository.delete_note(id).map_err(|e| {
            error!(note_id = %id, error = %e, "Error deleting note");
            e
        })?;

        match self.collections.remove(id) {
            Some((kind, _)) => info!(note_id = %id, collection = %kind, "Deleted note"),
            None => debug!(note_id = %id, "Deleted note was not cached locally"),
        }

        self.reset_view();
        self.persist();
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn archive(&mut self, id: &NoteId) -> Result<(), DomainError> {
        if self.collections.locate(id) != Some(CollectionKind::Active) {
            return Err(DomainError::NoteNotFound(id.clone()));
        }

        self.repository.archive_note(id).map_err(|e| {
            error!(note_id = %id, error = %e, "Error archiving note");
            e
        })?;

        self.collections
            .move_note(id, CollectionKind::Active, CollectionKind::Archived)?;
        info!(note_id = %id, "Archived note");

        self.reset_view();
        self.persist();
        Ok(())
    }

    /// Move a note to the trash. The server has no trash state, so this is local only.
    #[instrument(level = "debug", skip(self))]
    pub fn trash(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let from = match self.collections.locate(id) {
            Some(kind @ (CollectionKind::Active | CollectionKind::Archived)) => kind,
            _ => return Err(DomainError::NoteNotFound(id.clone())),
        };

        self.collections
            .move_note(id, from, CollectionKind::Trashed)?;
        info!(note_id = %id, from = %from, "Moved note to trash");

        self.reset_view();
        self.persist();
        Ok(())
    }

    #[instrument(level = "debug", skip(self, content))]
    pub fn edit(&mut self, id: &NoteId, title: &str, content: &str) -> Result<Note, DomainError> {
        validate_fields(title, content)?;
        if self.collections.locate(id).is_none() {
            return Err(DomainError::NoteNotFound(id.clone()));
        }

        let updated = self
            .repository
            .update_note(id, title, content)
            .map_err(|e| {
                error!(note_id = %id, error = %e, "Error updating note");
                e
            })?;

        let kind = self.collections.replace(id, updated.clone())?;
        info!(note_id = %id, collection = %kind, "Updated note");

        self.reset_view();
        self.persist();
        Ok(updated)
    }

    /// Feed a typed query into the search box.
    ///
    /// A blank query shows the whole active collection right away and
    /// discards any search still pending or in flight.
    pub fn search_input(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            self.debouncer.cancel();
            self.sequencer.invalidate();
            self.reset_view();
            return;
        }
        self.debouncer.input(query, now);
    }

    /// Time left until the pending query is sent
    pub fn search_remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Send the pending query if its quiet period has elapsed.
    ///
    /// Returns whether the view was replaced.
    pub fn poll_search(&mut self, now: Instant) -> Result<bool, DomainError> {
        let Some(query) = self.debouncer.ready(now) else {
            return Ok(false);
        };

        let ticket = self.issue_search();
        let results = self.repository.search_notes(&query).map_err(|e| {
            error!(query = %query, error = %e, "Search error");
            e
        })?;
        Ok(self.apply_search_results(ticket, results))
    }

    /// Debounced search that blocks until the quiet period is over
    pub fn search(&mut self, query: &str) -> Result<(), DomainError> {
        self.search_input(query, Instant::now());
        if let Some(wait) = self.search_remaining(Instant::now()) {
            std::thread::sleep(wait);
        }
        self.poll_search(Instant::now())?;
        Ok(())
    }

    pub fn issue_search(&mut self) -> SearchTicket {
        self.sequencer.issue()
    }

    /// Install search results unless a newer search has been issued since
    pub fn apply_search_results(&mut self, ticket: SearchTicket, results: Vec<Note>) -> bool {
        if !self.sequencer.is_current(ticket) {
            debug!(ticket = ticket.value(), "Dropping stale search results");
            return false;
        }

        debug!(ticket = ticket.value(), count = results.len(), "Applying search results");
        self.view = results;
        if let Some(key) = self.sort_key {
            sort_notes(&mut self.view, key);
        }
        true
    }

    /// Re-order the filtered view. The canonical collection keeps its order.
    pub fn sort(&mut self, key: SortKey) {
        self.sort_key = Some(key);
        sort_notes(&mut self.view, key);
    }

    fn reset_view(&mut self) {
        self.view = self.collections.active().to_vec();
        if let Some(key) = self.sort_key {
            sort_notes(&mut self.view, key);
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.cache.save(&self.collections) {
            warn!(error = %e, "Failed to write local cache");
        }
    }
}
