//! Error types for dataflow-audit
//!
//! Every public API returns `Result<T, Error>`. The variants fall into two
//! groups: run-level failures (usage, connection, login, worker group
//! listing) that end the process, and per-group fetch failures that the
//! topology collectors absorb so one broken group cannot blank the report.

use thiserror::Error;

/// The main error type for dataflow-audit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Run-level Errors
    // ============================================================================
    /// No deployment mode, or an unrecognised one, on the command line
    #[error("Please specify a deployment type, either 'cloud' or 'onprem'")]
    Usage,

    /// `--help` or `--version` was requested; carries the text clap renders
    #[error("{0}")]
    Help(clap::Error),

    /// The base URL is unusable or the host could not be reached
    #[error("Invalid connection string. Verify hostname, port, and protocol. ({message})")]
    InvalidConnection {
        /// Underlying cause
        message: String,
    },

    /// The login endpoint rejected the credentials or answered unexpectedly
    #[error("Login Failed\n-------------------------\n{status} {body}")]
    Authentication {
        /// HTTP status of the login response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The worker group listing could not be retrieved
    #[error("Unable to get Worker Groups: {message}")]
    Enumeration {
        /// Underlying cause
        message: String,
    },

    // ============================================================================
    // Input / Configuration Errors
    // ============================================================================
    /// Reading an interactive answer failed
    #[error("Failed to read input: {message}")]
    Prompt {
        /// Underlying cause
        message: String,
    },

    /// Settings file or environment override is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Underlying cause
        message: String,
    },

    /// Settings file is not valid YAML
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Response body is not the JSON shape expected
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport failure (connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Any status other than `200 OK`
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Raw response body
        body: String,
    },

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// Building or writing the CSV batch failed
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Filesystem or stdio failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Error wrapped with extra context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a connection error
    pub fn invalid_connection(message: impl Into<String>) -> Self {
        Self::InvalidConnection {
            message: message.into(),
        }
    }

    /// Create a login failure carrying the raw response
    pub fn authentication(status: u16, body: impl Into<String>) -> Self {
        Self::Authentication {
            status,
            body: body.into(),
        }
    }

    /// Create a worker group enumeration error
    pub fn enumeration(message: impl Into<String>) -> Self {
        Self::Enumeration {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
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

    /// Whether a failure while fetching one worker group's data may be
    /// absorbed by skipping that group.
    ///
    /// Bad statuses and bad bodies are scoped to a single group. Transport
    /// failures mean the control plane itself is gone.
    pub fn is_group_degradable(&self) -> bool {
        matches!(self, Error::HttpStatus { .. } | Error::JsonParse(_))
    }

    /// Whether this error should be printed as usage guidance on stdout
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage)
    }
}

/// Result type alias for dataflow-audit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
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
        let err = Error::config("bad timeout");
        assert_eq!(err.to_string(), "Configuration error: bad timeout");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::enumeration("HTTP 403");
        assert_eq!(err.to_string(), "Unable to get Worker Groups: HTTP 403");
    }

    #[test]
    fn test_login_failure_dumps_status_and_body() {
        let err = Error::authentication(401, r#"{"message":"Unauthorized"}"#);
        let rendered = err.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Login Failed");
        assert_eq!(lines[1], "-".repeat(25));
        assert_eq!(lines[2], r#"401 {"message":"Unauthorized"}"#);
    }

    #[test]
    fn test_invalid_connection_message() {
        let err = Error::invalid_connection("connection refused");
        assert!(err
            .to_string()
            .starts_with("Invalid connection string. Verify hostname, port, and protocol."));
    }

    #[test]
    fn test_is_group_degradable() {
        assert!(Error::http_status(500, "").is_group_degradable());
        assert!(Error::http_status(404, "").is_group_degradable());
        let bad_json = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(Error::from(bad_json).is_group_degradable());

        assert!(!Error::invalid_connection("refused").is_group_degradable());
        assert!(!Error::enumeration("nope").is_group_degradable());
        assert!(!Error::Usage.is_group_degradable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.with_context(|| "outer".to_string());
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
