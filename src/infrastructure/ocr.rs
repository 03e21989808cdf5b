// src/infrastructure/ocr.rs
use crate::application::TextExtractor;
use crate::constants::HTTP_TIMEOUT_SECS;
use crate::domain::DomainError;
use crate::infrastructure::http::{build_client, check_status, transport_error};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// OCR.space-style image to text service
pub struct OcrSpaceClient {
    client: Client,
    url: String,
    api_key: String,
    language: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrResponse {
    #[serde(default)]
    parsed_results: Vec<ParsedResult>,
    #[serde(default)]
    is_errored_on_processing: bool,
    #[serde(default)]
    error_message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: String,
}

/// The service sends either a string or a list of strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    fn joined(&self) -> String {
        match self {
            ErrorMessage::One(msg) => msg.clone(),
            ErrorMessage::Many(msgs) => msgs.join("; "),
        }
    }
}

impl OcrSpaceClient {
    pub fn new(url: &str, api_key: &str, language: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(Duration::from_secs(HTTP_TIMEOUT_SECS))?,
            url: url.to_string(),
            api_key: api_key.to_string(),
            language: language.to_string(),
        })
    }
}

/// Pull the recognized text out of a service response body
pub fn parse_ocr_response(body: &str) -> Result<String, DomainError> {
    let response: OcrResponse =
        serde_json::from_str(body).map_err(|e| DomainError::MalformedPayload(e.to_string()))?;

    if response.is_errored_on_processing {
        let message = response
            .error_message
            .map(|m| m.joined())
            .unwrap_or_else(|| "unknown OCR error".to_string());
        return Err(DomainError::Extraction(message));
    }

    let text = response
        .parsed_results
        .iter()
        .map(|r| r.parsed_text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text)
}

impl TextExtractor for OcrSpaceClient {
    #[instrument(level = "debug", skip(self))]
    fn extract(&self, image: &Path) -> Result<String, DomainError> {
        let form = multipart::Form::new()
            .text("language", self.language.clone())
            .text("isOverlayRequired", "false")
            .file("file", image)
            .map_err(|e| DomainError::Extraction(format!("Failed to read image: {e}")))?;

        let response = self
            .client
            .post(&self.url)
            .header("apikey", &self.api_key)
            .multipart(form)
            .send()
            .map_err(|e| DomainError::Extraction(transport_error(e).to_string()))?;
        let body = check_status(response)
            .map_err(|e| DomainError::Extraction(e.to_string()))?
            .text()
            .map_err(|e| DomainError::Extraction(e.to_string()))?;

        debug!(bytes = body.len(), "OCR response received");
        parse_ocr_response(&body)
    }
}
