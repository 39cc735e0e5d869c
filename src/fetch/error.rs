//! Error types for the fetch module

use thiserror::Error;

/// Error type for page retrieval
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, body read, client timeout)
    #[error("HTTP error fetching {url}: {source}")]
    Transport {
        /// URL being fetched
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Unexpected status {status} fetching {url}")]
    Status {
        /// URL being fetched
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The catalog has no page at the URL
    #[error("No page available at {0}")]
    NotFound(String),

    /// The HTTP session could not be created
    #[error("Failed to open HTTP session: {0}")]
    Session(String),
}
