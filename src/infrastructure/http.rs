// src/infrastructure/http.rs
use crate::domain::DomainError;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Blocking client with a request timeout
pub fn build_client(timeout: Duration) -> Result<Client, DomainError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainError::Remote(format!("Failed to build HTTP client: {e}")))
}

/// Turn a non-2xx response into `DomainError::Remote` carrying status and body
pub fn check_status(response: Response) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(DomainError::Remote(format!("{status}: {body}")))
}

pub fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
    let body = response
        .text()
        .map_err(|e| DomainError::Remote(format!("Failed to read response body: {e}")))?;
    serde_json::from_str(&body).map_err(|e| DomainError::MalformedPayload(e.to_string()))
}

pub fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Remote(format!("request timed out: {e}"))
    } else {
        DomainError::Remote(e.to_string())
    }
}
