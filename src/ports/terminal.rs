// src/ports/terminal.rs
use crate::application::Enhancement;
use crate::constants::PREVIEW_WIDTH;
use crate::domain::Note;
use crate::util::text::preview;
use anyhow::{Context, Result};
use std::fmt::Write;

const EMPTY_LIST: &str = "No notes available";

/// Renders notes for the terminal, as aligned text or JSON
#[derive(Debug, Default)]
pub struct NotePresenter;

impl NotePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return format!("{EMPTY_LIST}\n");
        }

        let id_width = notes
            .iter()
            .map(|n| n.id.as_str().chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for note in notes {
            let created = note
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "{:<id_width$}  {:<16}  {:<7}  {}: {}",
                note.id.as_str(),
                created,
                note.color.as_deref().unwrap_or("-"),
                note.title.trim(),
                preview(&note.content, PREVIEW_WIDTH),
            );
        }
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", note.title.trim());
        let _ = writeln!(out, "{}", note.content);
        let _ = writeln!(out, "id: {}", note.id);
        if let Some(created) = note.created_at {
            let _ = writeln!(out, "created: {}", created.to_rfc3339());
        }
        out
    }

    pub fn render_json(&self, notes: &[Note]) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes to JSON")
    }

    pub fn render_enhancement(&self, enhancement: &Enhancement) -> String {
        let source = match (&enhancement.model, enhancement.fallback) {
            (_, true) => "local cleanup".to_string(),
            (Some(model), false) => model.clone(),
            (None, false) => "AI".to_string(),
        };
        format!("{}\n\n[enhanced by {}]\n", enhancement.text, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use chrono::{TimeZone, Utc};

    fn note() -> Note {
        Note {
            id: NoteId::from("65f0a1"),
            title: "Groceries".to_string(),
            content: "milk\neggs".to_string(),
            color: Some("#ffe666".to_string()),
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn given_empty_list_when_rendering_then_shows_placeholder() {
        let presenter = NotePresenter::new();

        assert_eq!(presenter.render_list(&[]), "No notes available\n");
    }

    #[test]
    fn given_note_when_rendering_list_then_one_line_with_preview() {
        let presenter = NotePresenter::new();

        let out = presenter.render_list(&[note()]);

        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("65f0a1"));
        assert!(out.contains("2024-03-01 09:30"));
        assert!(out.contains("Groceries: milk"));
        assert!(!out.contains("eggs"));
    }

    #[test]
    fn given_notes_when_rendering_json_then_array_with_created_at() {
        let presenter = NotePresenter::new();

        let json = presenter.render_json(&[note()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "65f0a1");
        assert_eq!(value[0]["createdAt"], "2024-03-01T09:30:00Z");
    }

    #[test]
    fn given_fallback_enhancement_when_rendering_then_names_local_cleanup() {
        let presenter = NotePresenter::new();

        let out = presenter.render_enhancement(&Enhancement::normalized("a   b"));

        assert!(out.starts_with("a b\n"));
        assert!(out.contains("[enhanced by local cleanup]"));
    }
}
