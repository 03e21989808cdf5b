// src/application/repository.rs
use crate::domain::{DomainError, Note, NoteCollections, NoteDraft, NoteId};

/// Remote source of truth for notes
pub trait NoteRepository {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Persist a new note and return the server's representation
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError>;

    fn update_note(&mut self, id: &NoteId, title: &str, content: &str)
        -> Result<Note, DomainError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError>;

    /// Flag a note as archived on the server
    fn archive_note(&mut self, id: &NoteId) -> Result<(), DomainError>;

    fn search_notes(&mut self, query: &str) -> Result<Vec<Note>, DomainError>;
}

/// Durable client-side copy of the three collections
pub trait NoteCache {
    /// Never fails: unreadable or missing data comes back empty
    fn load(&self, key: &str) -> Vec<Note>;

    fn save(&mut self, collections: &NoteCollections) -> Result<(), DomainError>;
}
