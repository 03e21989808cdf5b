// src/domain/sort.rs
use crate::domain::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first
    Date,
    /// Lexicographic by content
    Content,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "content" => Ok(SortKey::Content),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Stable sort of `notes` by `key`. Notes without a creation time go last.
pub fn sort_notes(notes: &mut [Note], key: SortKey) {
    match key {
        SortKey::Date => notes.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::Content => notes.sort_by(|a, b| a.content.cmp(&b.content)),
    }
}
