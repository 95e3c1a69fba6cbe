//! Error types for the cosmic guide

use thiserror::Error;

use crate::models::TopicCategory;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {

    // =============================
    // Remote Advisor Errors
    // =============================

    #[error("Gemini API key not configured")]
    MissingApiKey,

    #[error("Gemini API returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),

    #[error("Empty response from Gemini")]
    EmptyResponse,

    // =============================
    // Local Generator Errors
    // =============================

    #[error("Phrase list '{list}' is empty for category {category}")]
    EmptyPhraseList {
        category: TopicCategory,
        list: &'static str,
    },

    // =============================
    // Surfaces
    // =============================

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl AdvisorError {
    /// True for failures of the remote call that the advisor recovers from
    /// by answering locally.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            AdvisorError::RemoteStatus { .. }
                | AdvisorError::MalformedResponse(_)
                | AdvisorError::EmptyResponse
                | AdvisorError::HttpError(_)
        )
    }
}
