use super::{Fetcher, Page};
use crate::core::{ScrapeError, ScrapeResult};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Serves canned bodies keyed by URL. Unregistered URLs behave like a 404.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.pages.write().insert(url.to_string(), body.to_string());
        self
    }

    pub fn insert(&self, url: &str, body: &str) {
        self.pages.write().insert(url.to_string(), body.to_string());
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.read().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: Url) -> ScrapeResult<Page> {
        let key = url.to_string();
        self.requested.write().push(key.clone());

        let body = self.pages.read().get(&key).cloned();
        match body {
            Some(body) => Ok(Page {
                url,
                status: 200,
                body,
                timestamp: Utc::now(),
                retry_count: 0,
            }),
            None => Err(ScrapeError::Status {
                url: key,
                status: 404,
                attempts: 1,
            }),
        }
    }

    fn box_clone(&self) -> Box<dyn Fetcher> {
        Box::new(self.clone())
    }
}
