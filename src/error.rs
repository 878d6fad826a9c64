//! Error types for Dispatch.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Fetch and launch failures are recovered by the caller; only console I/O faults
//! and configuration errors reach `main`.

use thiserror::Error;

/// Errors that can occur while fetching or rendering the target page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The target could not be parsed as an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Server answered with a non-success status code
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The headless browser failed to launch or evaluate the page
    #[error("Render failed: {0}")]
    Render(String),

    /// Rendering did not finish within the configured budget
    #[error("Render timed out after {0}s")]
    RenderTimeout(u64),
}

/// Errors that can occur when handing a target to the OS default handler.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No opener program was found for this platform
    #[error("No default-handler opener found (tried {0})")]
    NoOpener(String),

    /// The opener was found but could not be spawned
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Only mailto:, tel:, http: and https: targets are launched
    #[error("Refusing to launch unsupported target: {0}")]
    InvalidUri(String),
}

/// Errors raised by the interactive console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Operator pressed Ctrl-C at a prompt
    #[error("Interrupted")]
    Interrupted,

    /// Input stream closed
    #[error("End of input")]
    Eof,

    /// Terminal I/O failure
    #[error("Console I/O error: {0}")]
    Io(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Convenience type alias for Results with LaunchError
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConsoleError {
    /// Interrupts and closed input both end the session as an operator abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, ConsoleError::Interrupted | ConsoleError::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP status 404 for https://example.com/");

        let err = FetchError::RenderTimeout(30);
        assert_eq!(err.to_string(), "Render timed out after 30s");

        let err = ConfigError::InvalidValue {
            var: "DISPATCH_KINDS".to_string(),
            reason: "Unknown kind: fax".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for DISPATCH_KINDS: Unknown kind: fax"
        );

        let err = LaunchError::InvalidUri("file:///etc/passwd".to_string());
        assert!(err.to_string().contains("file:///etc/passwd"));
    }

    #[test]
    fn test_console_abort_classification() {
        assert!(ConsoleError::Interrupted.is_abort());
        assert!(ConsoleError::Eof.is_abort());
        assert!(!ConsoleError::Io("broken pipe".to_string()).is_abort());
    }
}
