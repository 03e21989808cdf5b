// src/application/mod.rs
pub mod assistant;
pub mod collection_manager;
pub mod repository;
pub mod search;
pub mod text_pipeline;

pub use assistant::{Assistant, AssistantPrompt};
pub use collection_manager::NoteCollectionManager;
pub use repository::{NoteCache, NoteRepository};
pub use search::{SearchDebouncer, SearchSequencer, SearchTicket};
pub use text_pipeline::{Enhancement, TextEnhancer, TextExtractor, TextPipeline};
