use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

use super::retry::RetryConfig;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Run-wide settings, threaded through the pipeline instead of living in
/// module-level mutable state.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub user_agent: String,
    pub max_concurrency: usize,
    /// Minimum spacing between any two outbound requests, shared across workers.
    pub request_interval: Duration,
    pub retry_config: RetryConfig,
    /// Season-ending years for the league-average table (2010 => "2009-10").
    pub league_years: Range<i32>,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: 4,
            request_interval: Duration::from_millis(500),
            retry_config: RetryConfig::default(),
            league_years: 2010..2019,
            output_path: PathBuf::from("data.csv"),
        }
    }
}

impl ScrapeConfig {
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    pub fn with_retry(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn with_league_years(mut self, years: Range<i32>) -> Self {
        self.league_years = years;
        self
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }
}
