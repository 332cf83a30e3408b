use crate::core::{ScrapeError, ScrapeResult};
use url::Url;

pub const NBA_BASE_URL: &str = "https://www.basketball-reference.com";
pub const NCAA_BASE_URL: &str = "https://www.sports-reference.com";

/// Same-slug players get a numeric disambiguator on basketball-reference.
/// Anyone not listed takes the default "01". These lists are curated against
/// the roster, not derived; the formula cannot predict the suffix.
const NBA_SUFFIX_02: &[&str] = &[
    "Danny Green", "Patty Mills", "Wesley Matthews", "Jordan Crawford", "Derrick Williams",
    "Kemba Walker", "Markieff Morris", "Jordan Hamilton", "Tobias Harris", "Harrison Barnes",
    "Tim Hardaway Jr.", "Jerian Grant", "Jaylen Brown", "Taurean Prince", "Gerald Henderson",
    "PJ Hairston",
];
const NBA_SUFFIX_03: &[&str] = &["Brandon Knight", "Marcus Morris", "Jeffery Taylor", "Andre Roberson"];
const NBA_SUFFIX_04: &[&str] = &["Chris Johnson", "Stanley Johnson"];

const NCAA_SUFFIX_2: &[&str] = &[
    "Gerald Henderson", "James Johnson", "Derrick Williams", "Jordan Hamilton", "Josh Richardson",
    "Reggie Bullock",
];
const NCAA_SUFFIX_3: &[&str] = &["James Anderson", "Ryan Kelly"];
const NCAA_SUFFIX_4: &[&str] = &["Mike Scott"];

/// Players whose college slug is not formulaic (nicknames, alternate given
/// names). The override replaces the derived stem; the suffix still applies.
const NCAA_STEM_OVERRIDES: &[(&str, &str)] = &[
    ("Patty Mills", "patrick-mills"),
    ("Wesley Johnson", "wes-johnson"),
    ("Yogi Ferrell", "kevin-ferrell"),
];

fn nba_suffix(name: &str) -> &'static str {
    if NBA_SUFFIX_02.contains(&name) {
        "02"
    } else if NBA_SUFFIX_03.contains(&name) {
        "03"
    } else if NBA_SUFFIX_04.contains(&name) {
        "04"
    } else {
        "01"
    }
}

fn ncaa_suffix(name: &str) -> &'static str {
    if NCAA_SUFFIX_2.contains(&name) {
        "2"
    } else if NCAA_SUFFIX_3.contains(&name) {
        "3"
    } else if NCAA_SUFFIX_4.contains(&name) {
        "4"
    } else {
        "1"
    }
}

fn prefix(token: &str, len: usize) -> String {
    token.chars().take(len).collect()
}

/// basketball-reference profile URL: `/players/<initial>/<last[..5]><first[..2]><nn>.html`.
/// Apostrophes are dropped before tokenizing ("E'Twaun" -> "etwaun").
pub fn nba_player_url(name: &str) -> ScrapeResult<Url> {
    let normalized = name.to_lowercase().replace('\'', "");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ScrapeError::UnknownSlug(name.to_string()));
    }

    let slug = format!(
        "{}{}{}",
        prefix(tokens[1], 5),
        prefix(tokens[0], 2),
        nba_suffix(name)
    );
    let initial = prefix(tokens[1], 1);

    Ok(Url::parse(&format!(
        "{}/players/{}/{}.html",
        NBA_BASE_URL, initial, slug
    ))?)
}

/// sports-reference/cbb profile URL: `/cbb/players/<first>-<last>-<n>.html`.
/// Periods are dropped too, and a three-token name keeps all three tokens
/// ("Tim Hardaway Jr." -> "tim-hardaway-jr").
pub fn ncaa_player_url(name: &str) -> ScrapeResult<Url> {
    let normalized = name.to_lowercase().replace('\'', "").replace('.', "");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ScrapeError::UnknownSlug(name.to_string()));
    }

    let stem = match NCAA_STEM_OVERRIDES
        .iter()
        .find(|(exact, _)| *exact == name)
    {
        Some((_, stem)) => (*stem).to_string(),
        None => tokens.join("-"),
    };

    Ok(Url::parse(&format!(
        "{}/cbb/players/{}-{}.html",
        NCAA_BASE_URL,
        stem,
        ncaa_suffix(name)
    ))?)
}
