// src/domain/collection.rs
use crate::domain::{DomainError, Note, NoteId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The three disjoint sets a note can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Active,
    Archived,
    Trashed,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Active,
        CollectionKind::Archived,
        CollectionKind::Trashed,
    ];

    /// Key under which the collection is persisted
    pub fn storage_key(self) -> &'static str {
        match self {
            CollectionKind::Active => "notes",
            CollectionKind::Archived => "archive",
            CollectionKind::Trashed => "trash",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Owns the active, archived and trashed collections.
///
/// All mutation goes through methods that keep a note in exactly one
/// collection at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteCollections {
    active: Vec<Note>,
    archived: Vec<Note>,
    trashed: Vec<Note>,
}

impl NoteCollections {
    pub fn new(active: Vec<Note>, archived: Vec<Note>, trashed: Vec<Note>) -> Self {
        Self {
            active,
            archived,
            trashed,
        }
    }

    pub fn get(&self, kind: CollectionKind) -> &[Note] {
        match kind {
            CollectionKind::Active => &self.active,
            CollectionKind::Archived => &self.archived,
            CollectionKind::Trashed => &self.trashed,
        }
    }

    fn get_mut(&mut self, kind: CollectionKind) -> &mut Vec<Note> {
        match kind {
            CollectionKind::Active => &mut self.active,
            CollectionKind::Archived => &mut self.archived,
            CollectionKind::Trashed => &mut self.trashed,
        }
    }

    pub fn active(&self) -> &[Note] {
        &self.active
    }

    pub fn archived(&self) -> &[Note] {
        &self.archived
    }

    pub fn trashed(&self) -> &[Note] {
        &self.trashed
    }

    /// Drop repeated ids, keeping the copy in the furthest collection
    /// (trash, then archive, then active). Returns the number dropped.
    pub fn dedup(&mut self) -> usize {
        let before = self.len();
        let mut seen = HashSet::new();
        for kind in CollectionKind::ALL.into_iter().rev() {
            self.get_mut(kind).retain(|n| seen.insert(n.id.clone()));
        }
        before - self.len()
    }

    /// Which collection currently holds the note, if any
    pub fn locate(&self, id: &NoteId) -> Option<CollectionKind> {
        CollectionKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind).iter().any(|n| &n.id == id))
    }

    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        let kind = self.locate(id)?;
        self.get(kind).iter().find(|n| &n.id == id)
    }

    /// Append a note to the active collection
    pub fn push_active(&mut self, note: Note) {
        self.active.push(note);
    }

    /// Replace the active collection with server state.
    ///
    /// Notes already held in archive or trash are skipped so that each id
    /// stays in a single collection.
    pub fn replace_active(&mut self, notes: Vec<Note>) -> usize {
        let (kept, skipped): (Vec<Note>, Vec<Note>) = notes.into_iter().partition(|n| {
            !self.archived.iter().any(|a| a.id == n.id)
                && !self.trashed.iter().any(|t| t.id == n.id)
        });
        self.active = kept;
        skipped.len()
    }

    /// Move a note between collections. Source removal and destination
    /// append happen together or not at all.
    pub fn move_note(
        &mut self,
        id: &NoteId,
        from: CollectionKind,
        to: CollectionKind,
    ) -> Result<(), DomainError> {
        let source = self.get_mut(from);
        let pos = source
            .iter()
            .position(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        let note = source.remove(pos);
        self.get_mut(to).push(note);
        Ok(())
    }

    /// Remove a note from whichever collection holds it
    pub fn remove(&mut self, id: &NoteId) -> Option<(CollectionKind, Note)> {
        let kind = self.locate(id)?;
        let collection = self.get_mut(kind);
        let pos = collection.iter().position(|n| &n.id == id)?;
        Some((kind, collection.remove(pos)))
    }

    /// Replace a note in place, keeping its collection and position
    pub fn replace(&mut self, id: &NoteId, note: Note) -> Result<CollectionKind, DomainError> {
        let kind = self
            .locate(id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        let collection = self.get_mut(kind);
        if let Some(slot) = collection.iter_mut().find(|n| &n.id == id) {
            *slot = note;
        }
        Ok(kind)
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.archived.len() + self.trashed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
