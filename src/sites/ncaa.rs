use crate::core::{ScrapeError, ScrapeResult};
use crate::fetch::Fetcher;
use crate::html::{select_first, stat_float, stat_int, table_fragment};
use crate::sites::{percentage, slug};
use log::debug;
use scraper::{Html, Selector};
use url::Url;

/// NCAA-side features for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct NcaaStats {
    pub fg3a: i64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
    pub sos: f64,
    pub team_fg3a_avg: f64,
}

struct CareerTotals {
    fg3: i64,
    fg3a: i64,
    ft: i64,
    fta: i64,
    sos: f64,
}

fn parse_player_page(body: &str, url: &Url) -> ScrapeResult<(CareerTotals, Vec<String>)> {
    let doc = Html::parse_document(body);

    let totals = table_fragment(&doc, "all_players_totals", url)?;
    let foot = select_first(&totals, "tfoot > tr").ok_or_else(|| ScrapeError::TableNotFound {
        table_id: "all_players_totals tfoot".to_string(),
        url: url.to_string(),
    })?;

    // Strength of schedule comes from the per-game table's career line.
    let per_game = table_fragment(&doc, "players_per_game", url)?;
    let per_foot =
        select_first(&per_game, "tfoot > tr").ok_or_else(|| ScrapeError::TableNotFound {
            table_id: "players_per_game tfoot".to_string(),
            url: url.to_string(),
        })?;

    let career = CareerTotals {
        fg3: stat_int(foot, "fg3")?,
        fg3a: stat_int(foot, "fg3a")?,
        ft: stat_int(foot, "ft")?,
        fta: stat_int(foot, "fta")?,
        sos: stat_float(per_foot, "sos")?,
    };

    let row_selector = Selector::parse("tbody > tr").unwrap();
    let school_selector = Selector::parse("td > a").unwrap();

    let mut hrefs = Vec::new();
    for row in totals.select(&row_selector) {
        // Seasons without a school anchor carry no team stats.
        let Some(anchor) = row.select(&school_selector).next() else {
            continue;
        };
        if let Some(href) = anchor.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }

    Ok((career, hrefs))
}

/// Games played and total three-point attempts from one school-season page.
fn parse_school_page(body: &str, url: &Url) -> ScrapeResult<(i64, i64)> {
    let doc = Html::parse_document(body);
    let fragment = table_fragment(&doc, "team_stats", url)?;
    let row = select_first(&fragment, "tbody > tr").ok_or_else(|| ScrapeError::TableNotFound {
        table_id: "team_stats tbody".to_string(),
        url: url.to_string(),
    })?;

    Ok((stat_int(row, "g")?, stat_int(row, "fg3a")?))
}

/// Walks a player's college totals table, fetching each season's school page,
/// and derives the NCAA-side features. The team attempt average is total
/// attempts across all seasons divided by total games played, which weights
/// seasons by games rather than averaging per-season rates.
pub async fn collect(fetcher: &dyn Fetcher, name: &str) -> ScrapeResult<NcaaStats> {
    let url = slug::ncaa_player_url(name)?;
    let page = fetcher.fetch(url).await?;
    let (career, hrefs) = parse_player_page(&page.body, &page.url)?;

    let fg3_pct = percentage("ncaa_fg3_pct", career.fg3, career.fg3a)?;
    let ft_pct = percentage("ncaa_ft_pct", career.ft, career.fta)?;

    let mut total_games = 0i64;
    let mut total_fg3a = 0i64;

    for href in hrefs {
        let school_url = Url::parse(&format!("{}{}", slug::NCAA_BASE_URL, href))?;
        let school_page = fetcher.fetch(school_url).await?;
        let (games, fg3a) = parse_school_page(&school_page.body, &school_page.url)?;
        debug!("{}: school season g={} fg3a={}", name, games, fg3a);

        total_games += games;
        total_fg3a += fg3a;
    }

    if total_games == 0 {
        return Err(ScrapeError::FieldParse {
            column: "g".to_string(),
            context: format!("no games recorded across school seasons for {name}"),
        });
    }

    Ok(NcaaStats {
        fg3a: career.fg3a,
        fg3_pct,
        ft_pct,
        sos: career.sos,
        team_fg3a_avg: total_fg3a as f64 / total_games as f64,
    })
}
