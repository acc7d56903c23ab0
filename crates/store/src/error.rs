//! Store error taxonomy

use thiserror::Error;

/// Errors surfaced by checkpoint store operations.
///
/// A corrupt or unreadable artifact on *read* is not an error at this level:
/// the history reads as empty and the live document reads as `{}`, so the
/// feature stays available after manual file tampering. Failed *writes* are
/// propagated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The supplied document payload was absent or not a JSON object.
    #[error("missing data")]
    MissingData,
    /// No checkpoint matches the requested id.
    #[error("checkpoint not found")]
    NotFound,
    /// Underlying artifact write failed (disk, permissions).
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// Document could not be serialized for persistence.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
