use crate::core::{ScrapeConfig, ScrapeError, ScrapeResult};
use crate::export;
use crate::fetch::Fetcher;
use crate::model::PlayerRecord;
use crate::sites::{nba, ncaa, LeagueAverages};
use crate::stats::StatsTracker;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{info, warn};
use std::sync::Arc;
use tokio::spawn;
use tokio::task::JoinError;

/// A player the run could not extract, with the first error encountered.
#[derive(Debug)]
pub struct PlayerFailure {
    pub name: String,
    pub error: ScrapeError,
}

#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<PlayerRecord>,
    pub failures: Vec<PlayerFailure>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

// The name rides outside the spawned task so it survives a panic inside it.
type PlayerOutcome = (usize, String, Result<ScrapeResult<PlayerRecord>, JoinError>);
type PlayerTask = BoxFuture<'static, PlayerOutcome>;

/// Drives the whole run: league averages first, then the roster through a
/// bounded worker pool, then the export. Errors are caught at the per-player
/// boundary; one bad page costs that player, not the run.
pub struct ScrapeRunner {
    fetcher: Box<dyn Fetcher>,
    config: ScrapeConfig,
    stats: Arc<StatsTracker>,
}

impl ScrapeRunner {
    pub fn new(mut fetcher: Box<dyn Fetcher>, config: ScrapeConfig) -> Self {
        let stats = Arc::new(StatsTracker::new());
        fetcher.set_stats(Arc::clone(&stats));

        Self {
            fetcher,
            config,
            stats,
        }
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub async fn run(&self, roster: &[&str]) -> ScrapeResult<RunReport> {
        info!("Starting scrape of {} player(s)", roster.len());

        let league = Arc::new(
            LeagueAverages::fetch(self.fetcher.as_ref(), self.config.league_years.clone()).await?,
        );
        info!("League averages ready for {} season(s)", league.len());

        let mut futures: FuturesUnordered<PlayerTask> = FuturesUnordered::new();
        // Slots keep the export in roster order no matter when tasks finish.
        let mut slots: Vec<Option<PlayerRecord>> = roster.iter().map(|_| None).collect();
        let mut failures = Vec::new();

        for (index, name) in roster.iter().enumerate() {
            if futures.len() >= self.config.max_concurrency {
                if let Some(done) = futures.next().await {
                    self.settle(done, &mut slots, &mut failures);
                }
            }

            let fetcher = self.fetcher.box_clone();
            let league = Arc::clone(&league);
            let name = name.to_string();
            let task_name = name.clone();
            let handle = spawn(async move {
                scrape_player(fetcher.as_ref(), &league, &task_name).await
            });
            futures.push(Box::pin(async move { (index, name, handle.await) }) as PlayerTask);
        }

        while let Some(done) = futures.next().await {
            self.settle(done, &mut slots, &mut failures);
        }

        let records: Vec<PlayerRecord> = slots.into_iter().flatten().collect();
        export::export(&records, &self.config.output_path)?;

        if !failures.is_empty() {
            warn!("{} player(s) failed:", failures.len());
            for failure in &failures {
                warn!("  {}: {}", failure.name, failure.error);
            }
        }

        self.stats.finish();
        Ok(RunReport { records, failures })
    }

    fn settle(
        &self,
        done: PlayerOutcome,
        slots: &mut [Option<PlayerRecord>],
        failures: &mut Vec<PlayerFailure>,
    ) {
        match done {
            (index, name, Ok(Ok(record))) => {
                info!("Data for {} successfully extracted", name);
                self.stats.record_player(true);
                slots[index] = Some(record);
            }
            (_, name, Ok(Err(error))) => {
                warn!("Extraction failed for {}: {}", name, error);
                self.stats.record_player(false);
                failures.push(PlayerFailure { name, error });
            }
            (_, name, Err(e)) => {
                warn!("Task for {} aborted: {}", name, e);
                self.stats.record_player(false);
                failures.push(PlayerFailure {
                    name,
                    error: ScrapeError::Task(e.to_string()),
                });
            }
        }
    }
}

async fn scrape_player(
    fetcher: &dyn Fetcher,
    league: &LeagueAverages,
    name: &str,
) -> ScrapeResult<PlayerRecord> {
    info!("Extracting data for {}", name);

    let nba_stats = nba::collect(fetcher, league, name).await?;
    let ncaa_stats = ncaa::collect(fetcher, name).await?;

    Ok(PlayerRecord {
        name: name.to_string(),
        ncaa_fg3a: ncaa_stats.fg3a,
        ncaa_fg3_pct: ncaa_stats.fg3_pct,
        ncaa_ft_pct: ncaa_stats.ft_pct,
        ncaa_sos: ncaa_stats.sos,
        ncaa_team_fg3a_avg: ncaa_stats.team_fg3a_avg,
        nba_avg_team_ortg: nba_stats.avg_team_ortg,
        nba_relative_team_fg3a: nba_stats.relative_team_fg3a,
        nba_fg3_pct: nba_stats.fg3_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hoopscrape-run-{}-{}.csv", tag, std::process::id()))
    }

    fn league_page() -> String {
        r#"<div id="all_team-stats-per_game"><!--
            <table><tbody></tbody>
            <tfoot><tr><td data-stat="fg3a">20.0</td></tr></tfoot></table>
        --></div>"#
            .to_string()
    }

    fn nba_player_page(team_href: &str) -> String {
        format!(
            r#"<div id="all_totals"><!--
                <table><tbody>
                    <tr>
                        <th data-stat="season"><a>2009-10</a></th>
                        <td data-stat="team_id"><a href="{team_href}">GSW</a></td>
                    </tr>
                </tbody>
                <tfoot><tr>
                    <td data-stat="fg3">3</td><td data-stat="fg3a">10</td>
                </tr></tfoot></table>
            --></div>"#
        )
    }

    fn nba_team_page() -> String {
        r#"<div id="all_team_misc"><!--
            <table><tbody><tr><td data-stat="off_rtg">110.0</td></tr></tbody></table>
        --></div>
        <div id="all_team_and_opponent"><!--
            <table><tbody>
                <tr><td data-stat="fg3a_per_g">2050</td></tr>
                <tr><td data-stat="fg3a_per_g">25.0</td></tr>
            </tbody></table>
        --></div>"#
            .to_string()
    }

    fn ncaa_player_page(school_href: &str) -> String {
        format!(
            r#"<div id="all_players_totals"><!--
                <table><tbody>
                    <tr><td data-stat="school_name"><a href="{school_href}">Davidson</a></td></tr>
                </tbody>
                <tfoot><tr>
                    <td data-stat="fg3">4</td><td data-stat="fg3a">10</td>
                    <td data-stat="ft">8</td><td data-stat="fta">10</td>
                </tr></tfoot></table>
            --></div>
            <table id="players_per_game">
                <tfoot><tr><td data-stat="sos">7.0</td></tr></tfoot>
            </table>"#
        )
    }

    fn ncaa_school_page() -> String {
        r#"<table id="team_stats"><tbody><tr>
            <td data-stat="g">30</td><td data-stat="fg3a">600</td>
        </tr></tbody></table>"#
            .to_string()
    }

    fn fetcher_for(players: &[&str]) -> MockFetcher {
        let fetcher = MockFetcher::new();
        for year in 2010..2019 {
            fetcher.insert(
                &format!("https://www.basketball-reference.com/leagues/NBA_{year}.html"),
                &league_page(),
            );
        }
        fetcher.insert(
            "https://www.basketball-reference.com/teams/GSW/2010.html",
            &nba_team_page(),
        );
        fetcher.insert(
            "https://www.sports-reference.com/cbb/schools/davidson/2009.html",
            &ncaa_school_page(),
        );
        for name in players {
            let nba_url = crate::sites::slug::nba_player_url(name).unwrap();
            let ncaa_url = crate::sites::slug::ncaa_player_url(name).unwrap();
            fetcher.insert(nba_url.as_str(), &nba_player_page("/teams/GSW/2010.html"));
            fetcher.insert(
                ncaa_url.as_str(),
                &ncaa_player_page("/cbb/schools/davidson/2009.html"),
            );
        }
        fetcher
    }

    fn config(tag: &str) -> ScrapeConfig {
        ScrapeConfig::default()
            .with_output_path(temp_path(tag))
            .with_concurrency(2)
    }

    #[tokio::test]
    async fn full_run_exports_in_roster_order() {
        let roster = ["Stephen Curry", "Klay Thompson", "Jamal Murray"];
        let fetcher = fetcher_for(&roster);
        let config = config("order");
        let output = config.output_path.clone();

        let runner = ScrapeRunner::new(Box::new(fetcher), config);
        let report = runner.run(&roster).await.unwrap();

        assert!(report.is_complete());
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.records[0].name, "Stephen Curry");
        assert_eq!(report.records[1].name, "Klay Thompson");
        assert_eq!(report.records[2].name, "Jamal Murray");

        let record = &report.records[0];
        assert!((record.nba_relative_team_fg3a - 1.25).abs() < 1e-9);
        assert!((record.nba_fg3_pct - 30.0).abs() < 1e-9);
        assert!((record.ncaa_ft_pct - 80.0).abs() < 1e-9);
        assert!((record.ncaa_team_fg3a_avg - 20.0).abs() < 1e-9);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.lines().nth(1).unwrap().starts_with("Stephen Curry,"));

        std::fs::remove_file(&output).ok();
    }

    #[tokio::test]
    async fn failed_player_is_isolated_and_reported() {
        // Jamal Murray's pages are missing; the other two must still export.
        let roster = ["Stephen Curry", "Klay Thompson", "Jamal Murray"];
        let fetcher = fetcher_for(&roster[..2].to_vec());
        let config = config("isolated");
        let output = config.output_path.clone();

        let runner = ScrapeRunner::new(Box::new(fetcher), config);
        let report = runner.run(&roster).await.unwrap();

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "Jamal Murray");
        assert!(matches!(
            report.failures[0].error,
            ScrapeError::Status { status: 404, .. }
        ));

        let stats = runner.stats().get_stats();
        assert_eq!(stats.players_succeeded, 2);
        assert_eq!(stats.players_failed, 1);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 3);

        std::fs::remove_file(&output).ok();
    }

    /// Delegates to an inner [`MockFetcher`] but panics on one URL, so a
    /// worker task can be made to die mid-flight.
    #[derive(Clone)]
    struct PanickingFetcher {
        inner: MockFetcher,
        panic_on: String,
    }

    #[async_trait::async_trait]
    impl crate::fetch::Fetcher for PanickingFetcher {
        async fn fetch(&self, url: url::Url) -> ScrapeResult<crate::fetch::Page> {
            if url.as_str() == self.panic_on {
                panic!("injected fetch panic");
            }
            self.inner.fetch(url).await
        }

        fn box_clone(&self) -> Box<dyn crate::fetch::Fetcher> {
            Box::new(self.clone())
        }
    }

    #[tokio::test]
    async fn panicked_task_is_reported_as_failure() {
        let roster = ["Stephen Curry", "Klay Thompson", "Jamal Murray"];
        let panic_on = crate::sites::slug::nba_player_url("Klay Thompson").unwrap();
        let fetcher = PanickingFetcher {
            inner: fetcher_for(&roster),
            panic_on: panic_on.to_string(),
        };
        let config = config("panic");
        let output = config.output_path.clone();

        let runner = ScrapeRunner::new(Box::new(fetcher), config);
        let report = runner.run(&roster).await.unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "Klay Thompson");
        assert!(matches!(report.failures[0].error, ScrapeError::Task(_)));

        let stats = runner.stats().get_stats();
        assert_eq!(stats.players_succeeded, 2);
        assert_eq!(stats.players_failed, 1);

        std::fs::remove_file(&output).ok();
    }

    #[tokio::test]
    async fn league_failure_aborts_the_run() {
        let fetcher = MockFetcher::new(); // no pages at all
        let runner = ScrapeRunner::new(Box::new(fetcher), config("abort"));
        let err = runner.run(&["Stephen Curry"]).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn configured_output_path_feeds_the_split() {
        let roster = ["Stephen Curry", "Klay Thompson", "Jamal Murray"];
        let fetcher = fetcher_for(&roster);
        let config = config("split");
        let output = config.output_path.clone();
        let train = temp_path("split-train");
        let test = temp_path("split-test");

        let runner = ScrapeRunner::new(Box::new(fetcher), config);
        runner.run(&roster).await.unwrap();

        let (train_rows, test_rows) =
            crate::dataset::split(output.as_path(), train.as_path(), test.as_path(), 0.2).unwrap();
        assert_eq!(train_rows + test_rows, 3);

        for path in [&output, &train, &test] {
            std::fs::remove_file(path).ok();
        }
    }

    #[tokio::test]
    async fn empty_roster_exports_header_only() {
        let fetcher = fetcher_for(&[]);
        let config = config("empty");
        let output = config.output_path.clone();

        let runner = ScrapeRunner::new(Box::new(fetcher), config);
        let report = runner.run(&[]).await.unwrap();

        assert!(report.records.is_empty());
        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 1);

        std::fs::remove_file(&output).ok();
    }
}
