use async_trait::async_trait;
use dispatch::error::{FetchError, FetchResult};
use dispatch::fetcher::{PageRenderer, RenderedPage};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Renderer returning fixed content, standing in for the headless browser.
#[allow(dead_code)]
pub struct StaticRenderer {
    text: String,
    links: Vec<String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl StaticRenderer {
    pub fn new(text: &str, links: &[&str]) -> Self {
        Self {
            text: text.to_string(),
            links: links.iter().map(|l| l.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageRenderer for StaticRenderer {
    async fn render(&self, url: &str) -> FetchResult<RenderedPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RenderedPage {
            url: url.to_string(),
            text: self.text.clone(),
            links: self.links.iter().cloned().collect(),
            rendered: true,
        })
    }
}

/// Renderer that always fails, as a render timeout would.
#[allow(dead_code)]
pub struct FailingRenderer;

#[async_trait]
impl PageRenderer for FailingRenderer {
    async fn render(&self, _url: &str) -> FetchResult<RenderedPage> {
        Err(FetchError::RenderTimeout(30))
    }
}
