//! Error types for the employee directory
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The message shown to users whenever loading the directory fails.
///
/// Fetch failures are never distinguished by cause on screen; the detailed
/// error goes to the log instead.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch data";

/// The main error type for the employee directory
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration is unusable as a whole
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A single configuration field has a bad value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// Config file is not valid YAML for `ViewerConfig`
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Endpoint does not parse as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    /// Transport-level request failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Fetch did not finish in time
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Bound that was exceeded
        timeout_ms: u64,
    },

    /// Source payload is not a JSON employee list
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Source file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    // ============================================================================
    // I/O and Server Errors
    // ============================================================================
    /// Other I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server could not start or run
    #[error("Server error: {message}")]
    Server {
        /// What failed
        message: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else, already formatted
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Check if this error came from loading the record set.
    ///
    /// Network failures, non-success statuses, timeouts, undecodable payloads
    /// and missing source files all count as the one user-facing fetch
    /// failure.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::JsonParse(_)
                | Error::FileNotFound { .. }
        )
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        if self.is_fetch_failure() {
            FETCH_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Result type alias for the employee directory
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("page_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be positive"
        );

        let err = Error::http_status(500, "Internal Server Error");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_is_fetch_failure() {
        assert!(Error::http_status(500, "").is_fetch_failure());
        assert!(Error::http_status(404, "").is_fetch_failure());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_fetch_failure());
        assert!(Error::FileNotFound {
            path: "members.json".to_string()
        }
        .is_fetch_failure());

        assert!(!Error::config("test").is_fetch_failure());
        assert!(!Error::server("bind failed").is_fetch_failure());
    }

    #[test]
    fn test_user_message_hides_fetch_details() {
        let err = Error::http_status(503, "upstream exploded");
        assert_eq!(err.user_message(), FETCH_FAILURE_MESSAGE);

        let err = Error::config("page size missing");
        assert_eq!(
            err.user_message(),
            "Configuration error: page size missing"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
