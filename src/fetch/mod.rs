mod http;
mod limit;
mod mock;

pub use http::HttpFetcher;
pub use limit::RateLimiter;
pub use mock::MockFetcher;

use crate::core::ScrapeResult;
use crate::stats::StatsTracker;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use url::Url;

/// A fetched page, after retries have been resolved.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub status: u16,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub retry_count: usize,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: Url) -> ScrapeResult<Page>;

    fn box_clone(&self) -> Box<dyn Fetcher>;

    fn set_stats(&mut self, _stats: Arc<StatsTracker>) {}
}
