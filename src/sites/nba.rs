use crate::core::{ScrapeError, ScrapeResult};
use crate::fetch::Fetcher;
use crate::html::{select_first, stat_float, stat_int, table_fragment};
use crate::sites::{percentage, slug, LeagueAverages};
use log::{debug, trace};
use scraper::{Html, Selector};
use url::Url;

/// NBA-side features for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct NbaStats {
    pub fg3_pct: f64,
    pub avg_team_ortg: f64,
    pub relative_team_fg3a: f64,
}

struct CareerTotals {
    fg3: i64,
    fg3a: i64,
}

/// One season-team line from the career totals table. Consumed immediately
/// into running sums, never persisted.
struct SeasonRow {
    season: String,
    team: String,
    href: String,
}

/// Labels basketball-reference uses on the aggregate line of a traded
/// player's season. Counting these alongside the per-team rows would
/// double-count the season.
fn is_league_aggregate(team: &str) -> bool {
    matches!(team, "TOT" | "NBA")
}

fn parse_player_page(body: &str, url: &Url) -> ScrapeResult<(CareerTotals, Vec<SeasonRow>)> {
    let doc = Html::parse_document(body);
    let fragment = table_fragment(&doc, "all_totals", url)?;

    let foot = select_first(&fragment, "tfoot > tr").ok_or_else(|| ScrapeError::TableNotFound {
        table_id: "all_totals tfoot".to_string(),
        url: url.to_string(),
    })?;
    let totals = CareerTotals {
        fg3: stat_int(foot, "fg3")?,
        fg3a: stat_int(foot, "fg3a")?,
    };

    let row_selector = Selector::parse("tbody > tr").unwrap();
    let team_selector = Selector::parse("td > a").unwrap();
    let season_selector = Selector::parse("th > a").unwrap();

    let mut rows = Vec::new();
    for row in fragment.select(&row_selector) {
        // Rows with no team anchor (e.g. a Did Not Play season) carry no
        // per-team stats and are skipped.
        let Some(anchor) = row.select(&team_selector).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let season = row
            .select(&season_selector)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string())
            .ok_or_else(|| ScrapeError::FieldParse {
                column: "season".to_string(),
                context: "season cell missing from totals row".to_string(),
            })?;

        rows.push(SeasonRow {
            season,
            team: anchor.text().collect::<String>().trim().to_string(),
            href: href.to_string(),
        });
    }

    Ok((totals, rows))
}

/// Offensive rating and three-point attempts per game from one team-season
/// page. The per-game line is the second row of the team/opponent table; the
/// first row holds season totals.
fn parse_team_page(body: &str, url: &Url) -> ScrapeResult<(f64, f64)> {
    let doc = Html::parse_document(body);

    let misc = table_fragment(&doc, "all_team_misc", url)?;
    let misc_row = select_first(&misc, "tbody > tr").ok_or_else(|| ScrapeError::TableNotFound {
        table_id: "all_team_misc tbody".to_string(),
        url: url.to_string(),
    })?;
    let ortg = stat_float(misc_row, "off_rtg")?;

    let opponent = table_fragment(&doc, "all_team_and_opponent", url)?;
    let selector = Selector::parse("tbody > tr").unwrap();
    let per_game_row =
        opponent
            .select(&selector)
            .nth(1)
            .ok_or_else(|| ScrapeError::TableNotFound {
                table_id: "all_team_and_opponent per-game row".to_string(),
                url: url.to_string(),
            })?;
    let fg3a_per_g = stat_float(per_game_row, "fg3a_per_g")?;

    Ok((ortg, fg3a_per_g))
}

/// Walks a player's career totals table, fetching each season's team page,
/// and derives the NBA-side features:
/// career 3P%, ORTG averaged over team rows, and the player's team attempt
/// volume relative to the league (sum of team attempts per game divided by
/// the sum of league averages, one league term per distinct season).
pub async fn collect(
    fetcher: &dyn Fetcher,
    league: &LeagueAverages,
    name: &str,
) -> ScrapeResult<NbaStats> {
    let url = slug::nba_player_url(name)?;
    let page = fetcher.fetch(url).await?;
    let (totals, rows) = parse_player_page(&page.body, &page.url)?;

    let fg3_pct = percentage("nba_fg3_pct", totals.fg3, totals.fg3a)?;

    let mut seasons = 0usize;
    let mut sum_team_ortg = 0.0;
    let mut sum_team_fg3a = 0.0;
    let mut sum_league_fg3a = 0.0;
    let mut prev_season = String::new();

    for row in rows {
        if is_league_aggregate(&row.team) {
            trace!("{}: skipping aggregate row for {}", name, row.season);
            continue;
        }

        let team_url = Url::parse(&format!("{}{}", slug::NBA_BASE_URL, row.href))?;
        let team_page = fetcher.fetch(team_url).await?;
        let (ortg, fg3a_per_g) = parse_team_page(&team_page.body, &team_page.url)?;
        debug!(
            "{}: {} {} ortg={} fg3a/g={}",
            name, row.season, row.team, ortg, fg3a_per_g
        );

        seasons += 1;
        sum_team_ortg += ortg;
        sum_team_fg3a += fg3a_per_g;

        // A traded player has several rows for one season; the league
        // average counts once per distinct season label.
        if prev_season != row.season {
            sum_league_fg3a += league.get(&row.season)?;
        }
        prev_season = row.season;
    }

    if seasons == 0 {
        return Err(ScrapeError::FieldParse {
            column: "team".to_string(),
            context: format!("no per-team season rows for {name}"),
        });
    }

    Ok(NbaStats {
        fg3_pct,
        avg_team_ortg: sum_team_ortg / seasons as f64,
        relative_team_fg3a: sum_team_fg3a / sum_league_fg3a,
    })
}
