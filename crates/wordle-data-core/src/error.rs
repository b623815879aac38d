//! Error types for the Wordle data fetchers
//!
//! Every fallible step of a fetch maps into [`WordleError`]. The public
//! fetch operations collapse these into `None`, but the typed error stays
//! available through the `try_*` variants.

use thiserror::Error;

/// Error type for all Wordle data operations
#[derive(Error, Debug)]
pub enum WordleError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Status code returned by the server
        status: reqwest::StatusCode,
    },

    /// Response body was not valid JSON or had the wrong shape
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A required field was absent or empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse HTML or script content
    #[error("Failed to parse: {0}")]
    ParseError(String),

    /// Expected data was not found in any fetched resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Writing an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WordleError {
    /// Whether this error is a non-success HTTP status
    pub fn is_status(&self) -> bool {
        matches!(self, WordleError::HttpStatus { .. })
    }
}

/// Result type alias for Wordle data operations
pub type Result<T> = std::result::Result<T, WordleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http_status() {
        let error = WordleError::HttpStatus {
            url: "https://example.com/a.js".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            error.to_string(),
            "HTTP 404 Not Found from https://example.com/a.js"
        );
        assert!(error.is_status());
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = WordleError::MissingField("solution".to_string());
        assert_eq!(error.to_string(), "Missing field: solution");
        assert!(!error.is_status());
    }

    #[test]
    fn test_error_display_invalid_url() {
        let error = WordleError::InvalidUrl("not-a-url".to_string());
        assert_eq!(error.to_string(), "Invalid URL: not-a-url");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = WordleError::NotFound("word list".to_string());
        assert_eq!(error.to_string(), "Not found: word list");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = WordleError::from(json_err);
        assert!(error.to_string().starts_with("Failed to parse JSON:"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = WordleError::from(io_err);
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
