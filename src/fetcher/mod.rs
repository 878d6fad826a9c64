//! Page fetching: download, render, and fall back to static parsing.
//!
//! [`Fetcher::fetch`] downloads the target with the HTTP client and then asks
//! the renderer for the script-rendered text and links. A download failure is
//! returned to the caller. A render failure or timeout is not: the page
//! degrades to the text and links parsed from the downloaded HTML.

pub mod renderer;
pub mod static_page;

pub use renderer::{ChromeRenderer, PageRenderer};

use crate::client::{AsyncPageClient, AsyncPageClientImpl, PageClient};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Text and outbound links of a page, as the extractor consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Final page URL
    pub url: String,

    /// Visible page text
    pub text: String,

    /// Absolute http(s) links found on the page
    pub links: BTreeSet<String>,

    /// Whether scripts were executed to produce this content
    pub rendered: bool,
}

/// Prefix `https://` when the input carries no http(s) scheme.
///
/// ```
/// use dispatch::fetcher::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Normalize and parse a target, requiring a host.
pub fn parse_target(input: &str) -> FetchResult<Url> {
    let normalized = normalize_url(input);
    let url = Url::parse(&normalized).map_err(|_| FetchError::InvalidUrl(normalized.clone()))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(normalized));
    }
    Ok(url)
}

/// Downloads and renders a single page.
pub struct Fetcher {
    client: Arc<dyn AsyncPageClient>,
    renderer: Option<Arc<dyn PageRenderer>>,
}

impl Fetcher {
    /// Build the production fetcher: `ureq` download plus headless Chromium
    /// rendering when enabled in the config.
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(AsyncPageClientImpl::new(PageClient::new(config)));
        let renderer = config
            .render_enabled
            .then(|| Arc::new(ChromeRenderer::new(config)) as Arc<dyn PageRenderer>);
        Self::with_parts(client, renderer)
    }

    /// Assemble a fetcher from explicit parts (useful for testing).
    pub fn with_parts(
        client: Arc<dyn AsyncPageClient>,
        renderer: Option<Arc<dyn PageRenderer>>,
    ) -> Self {
        Self { client, renderer }
    }

    /// Fetch `target` and return its rendered text and links.
    ///
    /// # Errors
    ///
    /// Returns the download error (invalid URL, transport failure, non-2xx
    /// status, timeout). Rendering problems never surface here.
    pub async fn fetch(&self, target: &str) -> FetchResult<RenderedPage> {
        let url = parse_target(target)?;
        let html = self.client.get_html(url.as_str()).await?;
        info!(url = %html.final_url, status = html.status, "Page downloaded");

        let fallback = static_page::parse(&html.body, &html.final_url);

        let Some(renderer) = &self.renderer else {
            debug!("Rendering disabled; using static page content");
            return Ok(fallback);
        };

        match renderer.render(&html.final_url).await {
            Ok(page) => {
                info!(links = page.links.len(), "Page rendered");
                Ok(page)
            }
            Err(e) => {
                warn!(error = %e, "Render failed; using static page content");
                Ok(fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/contact "), "https://example.com/contact");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("HTTP://example.com"), "HTTP://example.com");
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(
            parse_target("example.com").unwrap().as_str(),
            "https://example.com/"
        );
        assert!(matches!(parse_target(""), Err(FetchError::InvalidUrl(_))));
        assert!(matches!(
            parse_target("exa mple.com"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
