// src/infrastructure/remote.rs
use crate::application::NoteRepository;
use crate::constants::HTTP_TIMEOUT_SECS;
use crate::domain::{DomainError, Note, NoteDraft, NoteId};
use crate::infrastructure::http::{build_client, check_status, parse_json, transport_error};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Notes REST backend. One request per call, no retries.
pub struct HttpNoteRepository {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct CreateNoteRequest<'a> {
    title: &'a str,
    content: &'a str,
    color: &'a str,
}

#[derive(Serialize)]
struct UpdateNoteRequest<'a> {
    title: &'a str,
    content: &'a str,
}

/// Create and update answer with `{ "note": {...} }`
#[derive(Deserialize)]
struct NoteEnvelope {
    note: Note,
}

impl HttpNoteRepository {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, DomainError> {
        let token = token.filter(|t| !t.trim().is_empty());
        if token.is_none() {
            warn!("No API token configured, requests are sent unauthenticated");
        }

        Ok(Self {
            client: build_client(Duration::from_secs(HTTP_TIMEOUT_SECS))?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with JSON content type and bearer token already attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request.send().map_err(transport_error)?;
        check_status(response)
    }
}

impl NoteRepository for HttpNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self.send(self.request(Method::GET, "/notes/all"))?;
        let notes: Vec<Note> = parse_json(response)?;
        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, draft), fields(client_id = %draft.client_id))]
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let body = CreateNoteRequest {
            title: &draft.title,
            content: &draft.content,
            color: &draft.color,
        };
        let response = self.send(self.request(Method::POST, "/notes").json(&body))?;
        let envelope: NoteEnvelope = parse_json(response)?;
        debug!(note_id = %envelope.note.id, "Server accepted note");
        Ok(envelope.note)
    }

    #[instrument(level = "debug", skip(self, content))]
    fn update_note(
        &mut self,
        id: &NoteId,
        title: &str,
        content: &str,
    ) -> Result<Note, DomainError> {
        let body = UpdateNoteRequest { title, content };
        let path = format!("/notes/{}", urlencoding::encode(id.as_str()));
        let response = self.send(self.request(Method::PUT, &path).json(&body))?;
        let envelope: NoteEnvelope = parse_json(response)?;
        Ok(envelope.note)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let path = format!("/notes/{}", urlencoding::encode(id.as_str()));
        self.send(self.request(Method::DELETE, &path))?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn archive_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let path = format!("/notes/archive/{}", urlencoding::encode(id.as_str()));
        self.send(self.request(Method::PUT, &path).json(&serde_json::json!({})))?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn search_notes(&mut self, query: &str) -> Result<Vec<Note>, DomainError> {
        let path = format!("/notes/search?query={}", urlencoding::encode(query));
        let response = self.send(self.request(Method::GET, &path))?;
        let notes: Vec<Note> = parse_json(response)?;
        debug!(count = notes.len(), "Search returned notes");
        Ok(notes)
    }
}
