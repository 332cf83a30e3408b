use hoopscrape::core::ScrapeConfig;
use hoopscrape::fetch::HttpFetcher;
use hoopscrape::model::ROSTER;
use hoopscrape::{dataset, ScrapeResult, ScrapeRunner};
use log::{error, info};

#[tokio::main]
async fn main() -> ScrapeResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    // `hoopscrape split` re-splits an existing data.csv without scraping.
    if std::env::args().nth(1).as_deref() == Some("split") {
        let (train, test) = dataset::split("data.csv", "train.csv", "test.csv", 0.2)?;
        info!("Wrote train.csv ({train} rows) and test.csv ({test} rows)");
        return Ok(());
    }

    let config = ScrapeConfig::default();
    let output_path = config.output_path.clone();
    let fetcher = HttpFetcher::new(&config)?;
    let runner = ScrapeRunner::new(Box::new(fetcher), config);

    let report = runner.run(ROSTER).await?;
    runner.stats().print_summary();

    if !report.is_complete() {
        error!(
            "{} of {} players failed; see warnings above",
            report.failures.len(),
            ROSTER.len()
        );
    }

    let (train, test) = dataset::split(
        output_path.as_path(),
        std::path::Path::new("train.csv"),
        std::path::Path::new("test.csv"),
        0.2,
    )?;
    info!("Wrote train.csv ({train} rows) and test.csv ({test} rows)");

    Ok(())
}
