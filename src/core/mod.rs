mod config;
mod errors;
pub mod retry;

pub use config::ScrapeConfig;
pub use errors::{ScrapeError, ScrapeResult};
pub use retry::{BackoffPolicy, RetryCondition, RetryConfig};
