// src/infrastructure/config.rs
use crate::constants::{AI_TIMEOUT_SECS, CACHE_CAPACITY, SEARCH_DEBOUNCE_MS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const APP_DIR: &str = "notify-notes";

/// TOML configuration for the notes client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CacheConfig {
    /// Empty means the platform cache directory
    #[serde(default)]
    pub dir: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OcrConfig {
    #[serde(default = "default_ocr_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_ocr_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AiConfig {
    #[serde(default = "default_ai_url")]
    pub url: String,
    /// Empty lets the service pick
    #[serde(default)]
    pub model: String,
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_base_url() -> String { "http://localhost:5001/api".to_string() }
fn default_capacity() -> usize { CACHE_CAPACITY }
fn default_debounce_ms() -> u64 { SEARCH_DEBOUNCE_MS }
fn default_ocr_url() -> String { "https://api.ocr.space/parse/image".to_string() }
fn default_ocr_language() -> String { "eng".to_string() }
fn default_ai_url() -> String { "http://localhost:5001/api/enhance".to_string() }
fn default_ai_timeout() -> u64 { AI_TIMEOUT_SECS }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            capacity: default_capacity(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            url: default_ocr_url(),
            api_key: String::new(),
            language: default_ocr_language(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            url: default_ai_url(),
            model: String::new(),
            timeout_secs: default_ai_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }
        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Platform config location, e.g. `~/.config/notify-notes/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(dir.join(APP_DIR).join("config.toml"))
    }

    /// Configured cache directory, or the platform cache location
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if !self.cache.dir.trim().is_empty() {
            return Ok(PathBuf::from(&self.cache.dir));
        }
        let dir = dirs::cache_dir().context("Could not find cache directory")?;
        Ok(dir.join(APP_DIR))
    }

    pub fn token(&self) -> Option<String> {
        Some(self.server.token.clone()).filter(|t| !t.trim().is_empty())
    }

    pub fn ai_model(&self) -> Option<String> {
        Some(self.ai.model.clone()).filter(|m| !m.trim().is_empty())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai.timeout_secs)
    }
}
