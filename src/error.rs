//! Error types for the arkspec crate

use std::time::Duration;

use thiserror::Error;

use crate::extract::ExtractError;
use crate::fetch::FetchError;
use crate::markup::ParseError;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to the caller for any failure to produce results
pub const RETRIEVAL_FAILED_MESSAGE: &str = "Could not retrieve results, try again.";

/// Error type for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// A page could not be retrieved
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// A page could not be parsed into a document
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A detail page lacked a required field
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// The whole query exceeded its time budget
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Text suitable for showing to the person who issued the query.
    ///
    /// Every failure mode collapses to the same message; the caller cannot
    /// act differently on a transport failure versus a malformed page.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Config(_) => "The catalog search is misconfigured.",
            _ => RETRIEVAL_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_cause() {
        let fetch: Error = FetchError::Status {
            url: "https://example.com".to_string(),
            status: 503,
        }
        .into();
        let parse: Error = ParseError::EmptyDocument.into();
        let timeout = Error::Timeout(Duration::from_secs(3));

        assert_eq!(fetch.user_message(), RETRIEVAL_FAILED_MESSAGE);
        assert_eq!(parse.user_message(), RETRIEVAL_FAILED_MESSAGE);
        assert_eq!(timeout.user_message(), RETRIEVAL_FAILED_MESSAGE);
    }

    #[test]
    fn test_missing_field_converts() {
        let err: Error = ExtractError::MissingRequiredField {
            field: "canonical url",
        }
        .into();
        assert!(matches!(err, Error::Extract(_)));
        assert!(err.to_string().contains("canonical url"));
    }
}
