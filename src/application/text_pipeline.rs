// src/application/text_pipeline.rs
use crate::domain::DomainError;
use crate::util::text::normalize_whitespace;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Image to text
pub trait TextExtractor {
    fn extract(&self, image: &Path) -> Result<String, DomainError>;
}

/// Cleans up raw extracted text
pub trait TextEnhancer {
    fn enhance(&self, text: &str) -> Result<Enhancement, DomainError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enhancement {
    pub text: String,
    /// Model reported by the service, `None` for the local fallback
    pub model: Option<String>,
    /// True when the service failed and whitespace normalization was used instead
    pub fallback: bool,
}

impl Enhancement {
    pub fn normalized(text: &str) -> Self {
        Self {
            text: normalize_whitespace(text),
            model: None,
            fallback: true,
        }
    }
}

/// OCR followed by optional AI enhancement
pub struct TextPipeline<X: TextExtractor, E: TextEnhancer> {
    extractor: X,
    enhancer: E,
}

impl<X: TextExtractor, E: TextEnhancer> TextPipeline<X, E> {
    pub fn new(extractor: X, enhancer: E) -> Self {
        Self { extractor, enhancer }
    }

    pub fn extract_text(&self, image: &Path) -> Result<String, DomainError> {
        if !image.is_file() {
            return Err(DomainError::Extraction(
                "Please upload an image first.".to_string(),
            ));
        }

        let text = self.extractor.extract(image)?;
        info!(image = %image.display(), chars = text.len(), "Extracted text");
        Ok(text.trim().to_string())
    }

    /// Enhance `text`; any service failure degrades to whitespace normalization
    pub fn enhance_text(&self, text: &str) -> Result<Enhancement, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Enhancement("No text to enhance!".to_string()));
        }

        match self.enhancer.enhance(text) {
            Ok(enhancement) => Ok(enhancement),
            Err(e) => {
                warn!(error = %e, "AI enhancement failed, using local cleanup");
                Ok(Enhancement::normalized(text))
            }
        }
    }

    pub fn extract_and_enhance(&self, image: &Path) -> Result<(String, Enhancement), DomainError> {
        let text = self.extract_text(image)?;
        let enhancement = self.enhance_text(&text)?;
        Ok((text, enhancement))
    }
}
