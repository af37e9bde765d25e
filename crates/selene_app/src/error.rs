//! Error types for the application layer.

use selene_phase::PhaseError;
use selene_time::TimeError;

/// Errors from a key-value store backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error: {0}")]
    Io(String),
    /// Stored content is not valid JSON of the expected shape.
    #[error("store JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Errors surfaced by `AppContext` and the snapshot builders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("phase error: {0}")]
    Phase(#[from] PhaseError),
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// No catalog location has this id.
    #[error("unknown location id: {0}")]
    UnknownLocation(String),
    /// No supported language has this code.
    #[error("unsupported language code: {0}")]
    UnknownLanguage(String),
}
