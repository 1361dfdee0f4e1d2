//! Error types for token encodings.

/// Errors that can occur while encoding or decoding tokens.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// Malformed or unserializable JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
