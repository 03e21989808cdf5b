// src/infrastructure/enhancer.rs
use crate::application::{Enhancement, TextEnhancer};
use crate::domain::DomainError;
use crate::infrastructure::http::{build_client, check_status, parse_json, transport_error};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// AI text enhancement service: `{ text } -> { success, enhancedText, modelUsed }`
pub struct AiEnhancementClient {
    client: Client,
    url: String,
    model: Option<String>,
}

#[derive(Serialize)]
struct EnhanceRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    enhanced_text: Option<String>,
    #[serde(default)]
    model_used: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AiEnhancementClient {
    pub fn new(url: &str, model: Option<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.to_string(),
            model,
        })
    }
}

impl EnhanceResponse {
    fn into_enhancement(self) -> Result<Enhancement, DomainError> {
        if !self.success {
            return Err(DomainError::Enhancement(
                self.error.unwrap_or_else(|| "service reported failure".to_string()),
            ));
        }

        let text = self
            .enhanced_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::Enhancement("response without enhancedText".to_string()))?;

        Ok(Enhancement {
            text,
            model: self.model_used,
            fallback: false,
        })
    }
}

impl TextEnhancer for AiEnhancementClient {
    #[instrument(level = "debug", skip(self, text), fields(chars = text.len()))]
    fn enhance(&self, text: &str) -> Result<Enhancement, DomainError> {
        let body = EnhanceRequest {
            text,
            model: self.model.as_deref(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(transport_error)?;
        let parsed: EnhanceResponse = parse_json(check_status(response)?)?;

        let enhancement = parsed.into_enhancement()?;
        debug!(model = ?enhancement.model, "Text enhanced");
        Ok(enhancement)
    }
}
