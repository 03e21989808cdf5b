// src/constants.rs
//
// Application-wide constants. Each one documents where it is used.

/// Background colors assigned to new notes, picked at random.
///
/// Used in: `domain/note.rs`
pub const NOTE_PALETTE: &[&str] = &["#ffe666", "#f5c27d", "#f6cebf", "#e3b7d2", "#bfe7f6"];

/// Prefix of client-side ids given to notes the server has not accepted yet.
///
/// Used in: `domain/note.rs`
pub const EPHEMERAL_ID_PREFIX: &str = "local-";

/// Quiet period before a typed search query is sent to the server.
///
/// Used in: `infrastructure/config.rs` (default of `search.debounce_ms`)
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Timeout for the AI enhancement request.
///
/// Used in: `infrastructure/config.rs` (default of `ai.timeout_secs`)
pub const AI_TIMEOUT_SECS: u64 = 30;

/// Timeout for notes API, OCR and assistant requests.
///
/// Used in: `infrastructure/remote.rs`, `infrastructure/ocr.rs`, `infrastructure/assistant.rs`
pub const HTTP_TIMEOUT_SECS: u64 = 15;

/// Maximum notes kept per collection in the local cache.
///
/// Used in: `infrastructure/config.rs` (default of `cache.capacity`)
pub const CACHE_CAPACITY: usize = 1000;

/// Length of the content preview shown in list output.
///
/// Used in: `ports/terminal.rs`
pub const PREVIEW_WIDTH: usize = 60;
