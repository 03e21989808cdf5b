// src/application/assistant.rs
use crate::domain::DomainError;
use tracing::error;

pub const NO_REPLY: &str = "No response from AI.";
pub const REPLY_FAILED: &str = "Error getting response.";

/// Free-form question answering service
pub trait Assistant {
    /// `Ok(None)` when the service answered without a reply
    fn ask(&self, message: &str) -> Result<Option<String>, DomainError>;
}

/// "Ask AI" prompt: never fails, always yields something to show
pub struct AssistantPrompt<A: Assistant> {
    assistant: A,
}

impl<A: Assistant> AssistantPrompt<A> {
    pub fn new(assistant: A) -> Self {
        Self { assistant }
    }

    /// Returns `None` for a blank message, otherwise the text to display
    pub fn ask(&self, message: &str) -> Option<String> {
        if message.trim().is_empty() {
            return None;
        }

        let reply = match self.assistant.ask(message) {
            Ok(Some(reply)) => reply,
            Ok(None) => NO_REPLY.to_string(),
            Err(e) => {
                error!(error = %e, "Error fetching AI reply");
                REPLY_FAILED.to_string()
            }
        };
        Some(reply)
    }
}
