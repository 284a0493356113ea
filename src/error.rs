//! Error types for the quotes client library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for all quotes client operations.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Quote with the given id does not exist upstream
    #[error("quote {id} not found")]
    NotFound {
        /// The id that was requested
        id: u64,
    },

    /// Upstream returned a non-success status
    #[error("upstream returned HTTP {status}")]
    Status {
        /// The HTTP status code returned by the upstream API
        status: reqwest::StatusCode,
        /// The raw response body, kept for logging and diagnostics
        body: String,
    },

    /// Response body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl QuoteError {
    /// Check if this error is the expected "quote does not exist" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuoteError::NotFound { .. })
    }

    /// The HTTP status code a consumer-facing endpoint should answer with.
    ///
    /// `NotFound` maps to 404; everything else is a generic upstream failure
    /// and maps to 500.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() { 404 } else { 500 }
    }

    /// Build the consumer-facing response body for this error.
    ///
    /// `label` names the failed operation (e.g. "Failed to fetch quotes") and
    /// becomes the stable error category; the human-readable detail goes into
    /// `message`. A `NotFound` always renders as `{"error": "Quote not found"}`
    /// with no message.
    pub fn to_response(&self, label: &str) -> ErrorResponse {
        match self {
            QuoteError::NotFound { .. } => ErrorResponse {
                error: "Quote not found".to_string(),
                message: None,
            },
            other => ErrorResponse {
                error: label.to_string(),
                message: Some(other.to_string()),
            },
        }
    }
}

/// The `{error, message}` body returned to consumers on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error category (e.g. "Failed to fetch quotes", "Quote not found")
    pub error: String,
    /// Human-readable detail, absent for not-found responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
