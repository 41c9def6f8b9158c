//! Application Error Types
//!
//! Centralized error handling for the store seam plus top-level
//! aggregation for the binary. Subsystems with richer failure modes
//! (configuration resolution, event id allocation) keep their own
//! enums and convert into `AppError` at the startup boundary.

use crate::application::services::event_ids::EventIdError;
use crate::config::ConfigError;

/// Errors surfaced by the remote document store.
///
/// "Document not found" is deliberately not an error: reads return
/// `Option` and callers decide what absence means.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("malformed document at {path}: {source}")]
    MalformedDocument {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to encode document at {path}: {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("document store error: {0}")]
    Store(#[from] StoreError),

    #[error("event id allocation error: {0}")]
    EventId(#[from] EventIdError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
