//! Script rendering in a headless browser.
//!
//! [`ChromeRenderer`] launches a fresh headless Chromium per call, loads the
//! page, waits for the settle delay so late-injected content appears, and
//! reads back the visible text and links. The browser is closed and its
//! event-handler task joined on every exit path.

use super::RenderedPage;
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Evaluated in the page after it settles. Returns a JSON string so the
/// result does not depend on remote-object serialization.
const SNAPSHOT_SCRIPT: &str = r#"
JSON.stringify({
  text: (document.body || document.documentElement).innerText || "",
  links: Array.from(document.querySelectorAll("a[href]")).map(a => a.href)
})
"#;

/// Produces the rendered form of a page.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &str) -> FetchResult<RenderedPage>;
}

#[derive(Debug, Deserialize)]
struct PageSnapshot {
    #[serde(default)]
    text: String,
    #[serde(default)]
    links: Vec<String>,
}

impl PageSnapshot {
    fn into_page(self, url: String) -> RenderedPage {
        let links: BTreeSet<String> = self
            .links
            .into_iter()
            .filter(|link| link.starts_with("http://") || link.starts_with("https://"))
            .collect();

        RenderedPage {
            url,
            text: self.text,
            links,
            rendered: true,
        }
    }
}

/// Headless Chromium renderer.
#[derive(Debug, Clone)]
pub struct ChromeRenderer {
    timeout: Duration,
    settle: Duration,
    chrome_path: Option<PathBuf>,
}

impl ChromeRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            timeout: config.render_timeout(),
            settle: config.settle_delay(),
            chrome_path: config.chrome_path.clone(),
        }
    }

    fn browser_config(&self) -> FetchResult<BrowserConfig> {
        let mut builder = BrowserConfig::builder().request_timeout(self.timeout);
        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(FetchError::Render)
    }

    async fn snapshot(&self, browser: &Browser, url: &str) -> FetchResult<RenderedPage> {
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| FetchError::Render(e.to_string()))?;
        debug!(url, settle_ms = self.settle.as_millis() as u64, "Page loaded, settling");

        tokio::time::sleep(self.settle).await;

        let raw: String = page
            .evaluate(SNAPSHOT_SCRIPT)
            .await
            .map_err(|e| FetchError::Render(e.to_string()))?
            .into_value()
            .map_err(|e| FetchError::Render(format!("Unexpected snapshot value: {}", e)))?;

        let snapshot: PageSnapshot = serde_json::from_str(&raw)
            .map_err(|e| FetchError::Render(format!("Malformed snapshot: {}", e)))?;

        let final_url = page
            .url()
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| url.to_string());

        Ok(snapshot.into_page(final_url))
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> FetchResult<RenderedPage> {
        let budget = self.timeout.as_secs();
        let config = self.browser_config()?;

        let (mut browser, mut handler) = tokio::time::timeout(self.timeout, Browser::launch(config))
            .await
            .map_err(|_| FetchError::RenderTimeout(budget))?
            .map_err(|e| FetchError::Render(format!("Browser launch failed: {}", e)))?;

        let handler_task = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let outcome = tokio::time::timeout(self.timeout, self.snapshot(&browser, url)).await;

        // Release the browser whatever the outcome
        if let Err(e) = browser.close().await {
            warn!(error = %e, "Failed to close headless browser cleanly");
        }
        if let Err(e) = browser.wait().await {
            warn!(error = %e, "Failed to reap headless browser process");
        }
        handler_task.abort();
        let _ = handler_task.await;

        match outcome {
            Ok(result) => result,
            Err(_) => Err(FetchError::RenderTimeout(budget)),
        }
    }
}
