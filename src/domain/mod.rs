// src/domain/mod.rs
pub mod collection;
pub mod error;
pub mod note;
pub mod sort;

pub use collection::{CollectionKind, NoteCollections};
pub use error::DomainError;
pub use note::{Note, NoteDraft, NoteId};
pub use sort::{sort_notes, SortKey};
