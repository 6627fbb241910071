//! Store-subsystem error type.

use thiserror::Error;

/// Errors from persistence, capacity loading, and dispatch calls.
///
/// All are user-visible and recoverable: the host shows a message and the
/// local map state is left exactly as it was.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("map {0:?} not found")]
    MapNotFound(String),

    #[error("invalid map file: {0}")]
    InvalidFormat(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
