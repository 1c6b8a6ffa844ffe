//! Error types for floorcalc library

use thiserror::Error;

/// Main error type for floorcalc operations
///
/// Malformed *individual* geometry entities never produce an error; they are
/// dropped during ingestion and recorded in the
/// [`IngestReport`](crate::ingest::IngestReport). Errors here cover failures
/// that prevent the engine from running at all, such as payload text that is
/// not valid JSON.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The geometry payload could not be deserialized
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for floorcalc operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
