//! Async wrapper around synchronous PageClient.
//!
//! This module provides an async interface to the synchronous PageClient by using
//! `tokio::task::spawn_blocking`, so the blocking request never stalls the runtime
//! that also drives the headless browser.

use crate::client::{FetchedHtml, PageClient};
use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async page download.
#[async_trait]
pub trait AsyncPageClient: Send + Sync {
    async fn get_html(&self, url: &str) -> FetchResult<FetchedHtml>;
}

/// Async wrapper around synchronous PageClient.
#[derive(Clone)]
pub struct AsyncPageClientImpl {
    client: Arc<PageClient>,
}

impl AsyncPageClientImpl {
    pub fn new(client: PageClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncPageClient for AsyncPageClientImpl {
    async fn get_html(&self, url: &str) -> FetchResult<FetchedHtml> {
        let client = self.client.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || client.get_html(&url))
            .await
            .map_err(|e| FetchError::HttpError(format!("Task join error: {}", e)))?
    }
}
