use std::time::Duration;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request to the news provider.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-200 status code.
    ///
    /// The raw body is kept for diagnostics; it is logged, never shown to end clients.
    #[error("Unexpected response status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// A JSON payload (provider response or cached value) could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single upstream attempt did not complete within its deadline.
    #[error("upstream attempt timed out after {0:?}")]
    Timeout(Duration),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The cache backend failed (connection, command or protocol error).
    #[error("cache backend error: {0}")]
    Cache(String),

    /// Configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The ticker query was empty.
    #[error("query must not be empty")]
    InvalidQuery,
}
