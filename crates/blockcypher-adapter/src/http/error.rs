/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, configuration)
[OUTPUT]: Structured error type carrying the underlying failure unmodified
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the BlockCypher adapter
#[derive(Error, Debug)]
pub enum BlockcypherError {
    /// HTTP request failed before a response status was available
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status; `message` is the raw body
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the declared shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlockcypherError {
    /// HTTP status attached to the failure, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BlockcypherError::Http(err) => err.status(),
            BlockcypherError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BlockcypherError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for BlockCypher operations
pub type Result<T> = std::result::Result<T, BlockcypherError>;
