//! Error types and error handling for the Arkivo service.
//!
//! This module defines the error types used throughout the
//! application. Adapter-specific presentation (CLI exit codes,
//! response classes) is derived from the classification predicates.

use thiserror::Error;

/// Result type alias for Arkivo operations
pub type Result<T> = std::result::Result<T, ArkivoError>;

/// Main error type for the Arkivo service
#[derive(Error, Debug)]
pub enum ArkivoError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid archive source: {0}")]
    InvalidSource(String),

    #[error("No archives are open")]
    NoArchivesOpen,

    #[error("No matches found for '{query}' in any open archive")]
    NoMatches { query: String },

    #[error("Entry '{path}' in archive '{archive}' is not text content (MIME type: {mime})")]
    NonTextContent {
        archive: String,
        path: String,
        mime: String,
    },

    #[error(
        "Failed to decode content ({size} bytes) of entry '{path}' in archive '{archive}' \
         using any supported encoding"
    )]
    DecodeFailure {
        archive: String,
        path: String,
        size: usize,
    },

    #[error("Failed to retrieve content of entry '{path}' in archive '{archive}': {detail}")]
    ItemRetrieval {
        archive: String,
        path: String,
        detail: String,
    },

    #[error("HTML conversion failed: {0}")]
    ConversionFailure(String),

    #[error("HTML content is empty or whitespace-only")]
    EmptyInput,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ArkivoError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    ///
    /// The service boundary maps these to a not-found response class;
    /// everything that is neither not-found nor bad-request is internal.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ArkivoError::NotFound(_) | ArkivoError::NoMatches { .. }
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ArkivoError::InvalidSource(_)
                | ArkivoError::InvalidQuery(_)
                | ArkivoError::ConfigError(_)
        )
    }
}
