//! Error types for the QA pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors
///
/// All errors propagate to the caller unrecovered; the core performs no
/// retries and no silent degradation.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte stream is not a parseable PDF or contains no extractable text
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    /// The embedding provider returned an error
    #[error("Embedding unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// The generation provider returned an error
    #[error("Generation unavailable: {0}")]
    GenerationUnavailable(String),

    /// The generation provider returned no text
    #[error("Generation model returned no text")]
    GenerationEmpty,

    /// Malformed query parameters (blank question, k = 0)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A question was asked before any document was loaded
    #[error("No document loaded in this session")]
    NoDocument,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unreadable-document error
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::UnreadableDocument(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::EmbeddingUnavailable(message.into())
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::GenerationUnavailable(message.into())
    }

    /// Create an invalid-query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
