use super::{Fetcher, Page, RateLimiter};
use crate::core::{ScrapeConfig, ScrapeError, ScrapeResult};
use crate::core::retry::RetryConfig;
use crate::stats::StatsTracker;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches pages over HTTP with retry-with-backoff and a shared rate limiter.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    retry_config: RetryConfig,
    limiter: RateLimiter,
    stats: Arc<StatsTracker>,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> ScrapeResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            retry_config: config.retry_config.clone(),
            limiter: RateLimiter::new(config.request_interval),
            stats: Arc::new(StatsTracker::new()),
        })
    }

    async fn fetch_once(&self, url: &Url) -> ScrapeResult<(u16, String)> {
        let start = Utc::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let elapsed = Utc::now().signed_duration_since(start);

        self.stats.record_request(status, body.len(), elapsed);
        Ok((status, body))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: Url) -> ScrapeResult<Page> {
        let max_retries = self.retry_config.max_retries;

        for attempt in 0..=max_retries {
            self.limiter.acquire().await;
            debug!("GET {} (attempt {})", url, attempt + 1);

            let (status, body) = match self.fetch_once(&url).await {
                Ok(result) => result,
                Err(e) => {
                    // Transport failures (timeout, connection reset) use the
                    // same backoff schedule as throttle responses.
                    if attempt < max_retries {
                        let delay = self.retry_config.calculate_delay(attempt);
                        warn!("request to {} failed ({}), retrying in {:?}", url, e, delay);
                        self.stats.record_retry();
                        sleep(delay).await;
                        continue;
                    }
                    return Err(e);
                }
            };

            let transient = self.retry_config.should_retry(status, &body);
            if transient && attempt < max_retries {
                let delay = self.retry_config.calculate_delay(attempt);
                warn!(
                    "transient response from {} (status {}), retrying in {:?}",
                    url, status, delay
                );
                self.stats.record_retry();
                sleep(delay).await;
                continue;
            }

            if !(200..300).contains(&status) || transient {
                return Err(ScrapeError::Status {
                    url: url.to_string(),
                    status,
                    attempts: attempt + 1,
                });
            }

            return Ok(Page {
                url,
                status,
                body,
                timestamp: Utc::now(),
                retry_count: attempt,
            });
        }

        unreachable!("retry loop always returns")
    }

    fn box_clone(&self) -> Box<dyn Fetcher> {
        Box::new(self.clone())
    }

    fn set_stats(&mut self, stats: Arc<StatsTracker>) {
        self.stats = stats;
    }
}
