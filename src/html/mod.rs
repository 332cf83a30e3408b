use crate::core::{ScrapeError, ScrapeResult};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Locates the element with `table_id` and returns its content re-parsed as a
/// standalone fragment.
///
/// sports-reference pages wrap many stat tables in HTML comments to defeat
/// naive scrapers. When the located element carries a comment descendant, the
/// comment text is what gets re-parsed; otherwise the element itself is (some
/// tables, like `players_per_game` and `team_stats`, are served in the clear).
pub fn table_fragment(doc: &Html, table_id: &str, url: &Url) -> ScrapeResult<Html> {
    let selector = Selector::parse(&format!(r#"[id="{}"]"#, table_id)).unwrap();
    let element = doc
        .select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::TableNotFound {
            table_id: table_id.to_string(),
            url: url.to_string(),
        })?;

    let commented = element.descendants().find_map(|node| match node.value() {
        Node::Comment(comment) => Some(comment.comment.to_string()),
        _ => None,
    });

    let html = match commented {
        Some(comment_text) => comment_text,
        None => element.html(),
    };

    Ok(Html::parse_fragment(&html))
}

/// First element matching a CSS selector, if any.
pub fn select_first<'a>(fragment: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    fragment.select(&selector).next()
}

/// All elements matching a CSS selector.
pub fn select_all<'a>(fragment: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    fragment.select(&selector).collect()
}

/// Text of the `td[data-stat="…"]` cell inside a row, if the cell exists.
pub fn stat_cell(row: ElementRef<'_>, stat: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"td[data-stat="{}"]"#, stat)).unwrap();
    row.select(&selector)
        .next()
        .map(|cell| cell.text().collect::<String>().trim().to_string())
}

pub fn stat_int(row: ElementRef<'_>, stat: &str) -> ScrapeResult<i64> {
    let text = stat_cell(row, stat).unwrap_or_default();
    text.parse().map_err(|_| ScrapeError::FieldParse {
        column: stat.to_string(),
        context: text,
    })
}

pub fn stat_float(row: ElementRef<'_>, stat: &str) -> ScrapeResult<f64> {
    let text = stat_cell(row, stat).unwrap_or_default();
    text.parse().map_err(|_| ScrapeError::FieldParse {
        column: stat.to_string(),
        context: text,
    })
}
