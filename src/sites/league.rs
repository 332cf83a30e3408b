use crate::core::{ScrapeError, ScrapeResult};
use crate::fetch::Fetcher;
use crate::html::{select_first, stat_float, table_fragment};
use crate::sites::slug::NBA_BASE_URL;
use log::{debug, info};
use scraper::Html;
use std::collections::HashMap;
use std::ops::Range;
use url::Url;

/// League-wide average three-point attempts per game, keyed by season label
/// ("2009-10"). Populated once before any player is processed, read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct LeagueAverages {
    by_season: HashMap<String, f64>,
}

/// Season label for a season-ending year: 2010 -> "2009-10". Matches the
/// labels on basketball-reference season rows.
pub fn season_label(end_year: i32) -> String {
    format!("{}-{:02}", end_year - 1, end_year.rem_euclid(100))
}

fn league_fg3a_from(body: &str, url: &Url) -> ScrapeResult<f64> {
    let doc = Html::parse_document(body);
    let fragment = table_fragment(&doc, "all_team-stats-per_game", url)?;
    let row = select_first(&fragment, "tfoot tr").ok_or_else(|| ScrapeError::TableNotFound {
        table_id: "team-stats-per_game tfoot".to_string(),
        url: url.to_string(),
    })?;
    stat_float(row, "fg3a")
}

impl LeagueAverages {
    pub fn from_values(by_season: HashMap<String, f64>) -> Self {
        Self { by_season }
    }

    /// Fetches the league summary page for each season-ending year in `years`
    /// and records the league average attempts from the table footer.
    pub async fn fetch(fetcher: &dyn Fetcher, years: Range<i32>) -> ScrapeResult<Self> {
        info!("Acquiring league average 3-point attempts");
        let mut by_season = HashMap::new();

        for year in years {
            let url = Url::parse(&format!("{}/leagues/NBA_{}.html", NBA_BASE_URL, year))?;
            let page = fetcher.fetch(url).await?;
            let fg3a = league_fg3a_from(&page.body, &page.url)?;

            let season = season_label(year);
            debug!("league fg3a for {}: {}", season, fg3a);
            by_season.insert(season, fg3a);
        }

        Ok(Self { by_season })
    }

    pub fn get(&self, season: &str) -> ScrapeResult<f64> {
        self.by_season
            .get(season)
            .copied()
            .ok_or_else(|| ScrapeError::MissingLeagueAverage(season.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_season.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_season.is_empty()
    }
}
