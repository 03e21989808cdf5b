// src/domain/note.rs
use crate::constants::{EPHEMERAL_ID_PREFIX, NOTE_PALETTE};
use crate::domain::DomainError;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Note identity. Server-assigned once persisted, `local-<uuid>` before that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn ephemeral() -> Self {
        Self(format!("{}{}", EPHEMERAL_ID_PREFIX, uuid::Uuid::new_v4()))
    }

    pub fn is_ephemeral(&self) -> bool {
        self.0.starts_with(EPHEMERAL_ID_PREFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Some backends send numeric ids
impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => NoteId(s),
            RawId::Number(n) => NoteId(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNote")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accepts both `id` and Mongo-style `_id`
#[derive(Deserialize)]
struct WireNote {
    #[serde(default)]
    id: Option<NoteId>,
    #[serde(rename = "_id", default)]
    mongo_id: Option<NoteId>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireNote> for Note {
    type Error = String;

    fn try_from(wire: WireNote) -> Result<Self, Self::Error> {
        let id = wire
            .mongo_id
            .or(wire.id)
            .ok_or_else(|| "note without `id` or `_id`".to_string())?;

        Ok(Note {
            id,
            title: wire.title,
            content: wire.content,
            color: wire.color,
            created_at: wire.created_at,
        })
    }
}

/// A note the user typed that the server has not accepted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub client_id: NoteId,
    pub title: String,
    pub content: String,
    pub color: String,
}

impl NoteDraft {
    /// Validate user input and assign a display color.
    ///
    /// Both fields are checked after trimming, but stored as typed.
    pub fn new(title: &str, content: &str) -> Result<Self, DomainError> {
        validate_fields(title, content)?;

        let color = NOTE_PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(NOTE_PALETTE[0]);

        Ok(Self {
            client_id: NoteId::ephemeral(),
            title: title.to_string(),
            content: content.to_string(),
            color: color.to_string(),
        })
    }

    /// Fill in what the server left out of its representation
    pub fn promote(&self, mut confirmed: Note) -> Note {
        if confirmed.color.is_none() {
            confirmed.color = Some(self.color.clone());
        }
        if confirmed.created_at.is_none() {
            confirmed.created_at = Some(Utc::now());
        }
        confirmed
    }
}

pub fn validate_fields(title: &str, content: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(DomainError::EmptyNote);
    }
    Ok(())
}
