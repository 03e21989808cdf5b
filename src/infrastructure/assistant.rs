// src/infrastructure/assistant.rs
use crate::application::Assistant;
use crate::constants::HTTP_TIMEOUT_SECS;
use crate::domain::DomainError;
use crate::infrastructure::http::{build_client, check_status, parse_json, transport_error};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// "Ask AI" endpoint on the notes backend: `POST /ChatGPT { message } -> { reply }`
pub struct HttpAssistant {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    #[serde(default)]
    reply: Option<String>,
}

impl HttpAssistant {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(Duration::from_secs(HTTP_TIMEOUT_SECS))?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Assistant for HttpAssistant {
    #[instrument(level = "debug", skip(self, message))]
    fn ask(&self, message: &str) -> Result<Option<String>, DomainError> {
        let response = self
            .client
            .post(format!("{}/ChatGPT", self.base_url))
            .json(&AskRequest { message })
            .send()
            .map_err(transport_error)?;
        let parsed: AskResponse = parse_json(check_status(response)?)?;

        let reply = parsed.reply.filter(|r| !r.trim().is_empty());
        debug!(has_reply = reply.is_some(), "Assistant answered");
        Ok(reply)
    }
}
