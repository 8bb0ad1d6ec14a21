// Rust guideline compliant 2026-10-14

//! Error types for the Samachar core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Samachar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Network failure or non-success response from the remote API.
    TransportError,
    /// The remote API rejected a mutation as malformed.
    ValidationError,
    /// A local guard rejected the transition.
    InvalidTransition,
    /// A response arrived for a superseded query.
    StaleResponse,
    /// The requested entity was not found.
    NotFound,
    /// A list query was malformed.
    InvalidQuery,
    /// Configuration could not be loaded or failed validation.
    InvalidConfig,
    /// IO failure.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Error types for Samachar operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network error, timeout or 5xx from the remote API. Retryable.
    #[error("Transport error: {0}")]
    Transport(String),

    /// 4xx from a mutation endpoint. Surfaced to the caller, never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local guard rejection (wrong role or wrong source state).
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Response arrived after its query was superseded.
    #[error("Stale response for page {page}")]
    StaleResponse {
        /// Page the response was issued for.
        page: u32,
    },

    /// Entity not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed list query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Maps a non-success HTTP status from the remote API to an error.
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Response body or reason phrase
    ///
    /// # Returns
    ///
    /// `NotFound` for 404, `Validation` for other 4xx codes, and
    /// `Transport` for everything else.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Error::NotFound(message),
            400..=499 => Error::Validation(format!("{status}: {message}")),
            _ => Error::Transport(format!("{status}: {message}")),
        }
    }

    /// Whether re-invoking the same operation may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Whether the error should be discarded without reaching the user.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::StaleResponse { .. })
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Transport(_) => ErrorCode::TransportError,
            Error::Validation(_) => ErrorCode::ValidationError,
            Error::InvalidTransition(_) => ErrorCode::InvalidTransition,
            Error::StaleResponse { .. } => ErrorCode::StaleResponse,
            Error::NotFound(_) => ErrorCode::NotFound,
            Error::InvalidQuery(_) => ErrorCode::InvalidQuery,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Error::Io(_) => ErrorCode::IoError,
            Error::Json(_) => ErrorCode::JsonError,
        }
    }
}
