//! HTTP client for downloading the target page.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client applies the configured timeout and
//! User-Agent and maps transport and status failures into [`FetchError`].

mod async_wrapper;
pub use async_wrapper::{AsyncPageClient, AsyncPageClientImpl};

use crate::config::{Config, DEFAULT_USER_AGENT};
use crate::error::{FetchError, FetchResult};
use std::error::Error as _;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Raw HTML returned by a successful GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedHtml {
    /// URL after redirects; relative links resolve against it
    pub final_url: String,

    /// HTTP status code (always 2xx)
    pub status: u16,

    /// Response body as text
    pub body: String,
}

/// HTTP client for fetching a single page.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PageClient {
    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Overall request timeout
    timeout: Duration,
}

impl PageClient {
    /// Create a new PageClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_settings(config.fetch_timeout(), &config.user_agent)
    }

    /// Create a PageClient with explicit settings (useful for testing).
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();

        Self {
            agent: Arc::new(agent),
            timeout,
        }
    }

    /// Execute a GET request for `url` and read the body as text.
    pub fn get_html(&self, url: &str) -> FetchResult<FetchedHtml> {
        let start = Instant::now();
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .call()
            .map_err(|e| self.map_error(url, e))?;

        let status = response.status();
        let final_url = response.get_url().to_string();
        let body = response
            .into_string()
            .map_err(|e| FetchError::Body(e.to_string()))?;

        tracing::debug!(
            "GET {} - Success (status: {}, {} bytes, {} ms)",
            final_url,
            status,
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(FetchedHtml {
            final_url,
            status,
            body,
        })
    }

    /// Map a ureq error to a FetchError.
    fn map_error(&self, url: &str, error: ureq::Error) -> FetchError {
        match error {
            ureq::Error::Status(status, _) => FetchError::Status {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(transport) => {
                let message = transport.to_string();
                match transport.kind() {
                    ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                        FetchError::InvalidUrl(url.to_string())
                    }
                    ureq::ErrorKind::Io if is_timeout(&transport) => {
                        tracing::debug!("GET {} exceeded {:?}", url, self.timeout);
                        FetchError::Timeout
                    }
                    ureq::ErrorKind::ConnectionFailed => {
                        FetchError::HttpError(format!("Connection failed: {}", message))
                    }
                    _ => FetchError::HttpError(message),
                }
            }
        }
    }
}

/// Whether a transport failure was caused by the request deadline.
fn is_timeout(transport: &ureq::Transport) -> bool {
    transport
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| {
            matches!(
                e.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
            )
        })
}

impl Default for PageClient {
    fn default() -> Self {
        Self::with_settings(Duration::from_secs(30), DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_unanswered_request_maps_to_timeout() {
        // Connections queue in the backlog but no response is ever written
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let client = PageClient::with_settings(Duration::from_millis(300), DEFAULT_USER_AGENT);
        match client.get_html(&url) {
            Err(FetchError::Timeout) => {}
            other => panic!("Expected Timeout, got: {:?}", other),
        }
        drop(listener);
    }

    #[test]
    fn test_invalid_url_maps_to_invalid_url() {
        let client = PageClient::default();
        match client.get_html("not a url") {
            Err(FetchError::InvalidUrl(url)) => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidUrl, got: {:?}", other),
        }
    }
}
