// src/infrastructure/mod.rs
pub mod assistant;
pub mod cache;
pub mod config;
pub mod enhancer;
pub mod http;
pub mod ocr;
pub mod remote;

pub use assistant::HttpAssistant;
pub use cache::JsonFileCache;
pub use config::Config;
pub use enhancer::AiEnhancementClient;
pub use ocr::OcrSpaceClient;
pub use remote::HttpNoteRepository;
