// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Title and content must not be empty")]
    EmptyNote,
    #[error("Remote error: {0}")]
    Remote(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Text extraction failed: {0}")]
    Extraction(String),
    #[error("Text enhancement failed: {0}")]
    Enhancement(String),
}

impl DomainError {
    /// Short message suitable for showing to the user instead of the full error chain
    pub fn user_message(&self) -> &'static str {
        match self {
            DomainError::NoteNotFound(_) => "Note not found",
            DomainError::EmptyNote => "Title and content are required",
            DomainError::Remote(_) | DomainError::MalformedPayload(_) => {
                "Could not reach the notes server"
            }
            DomainError::Cache(_) => "Could not read local notes",
            DomainError::Extraction(_) => "Error extracting text.",
            DomainError::Enhancement(_) => "Error in AI processing. Please try again.",
        }
    }
}
