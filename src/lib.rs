pub mod core;
pub mod dataset;
pub mod export;
pub mod fetch;
pub mod html;
pub mod model;
pub mod pipeline;
pub mod sites;
pub mod stats;

pub use crate::core::{ScrapeConfig, ScrapeError, ScrapeResult};
pub use crate::fetch::{Fetcher, HttpFetcher};
pub use crate::model::PlayerRecord;
pub use crate::pipeline::{RunReport, ScrapeRunner};
pub use crate::stats::StatsTracker;
