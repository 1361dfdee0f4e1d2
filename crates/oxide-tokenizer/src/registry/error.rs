//! Error types for symbol registration.

/// Errors that can occur when registering custom symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The record carries no usable lookup key.
    #[error("Cannot register {registry} entry with an empty key")]
    EmptyKey {
        /// Name of the registry that rejected the record.
        registry: &'static str,
    },

    /// Punctuators are keyed by exactly one character.
    #[error("Punctuator lexeme must be exactly one character, got {0:?}")]
    InvalidPunctuator(String),
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
