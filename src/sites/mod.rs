pub mod league;
pub mod nba;
pub mod ncaa;
pub mod slug;

pub use league::LeagueAverages;
pub use nba::NbaStats;
pub use ncaa::NcaaStats;

use crate::core::{ScrapeError, ScrapeResult};

/// Shooting percentage on a 0-100 scale. Zero attempts would divide by zero
/// in the derivation, so it surfaces as a parse-class error instead of a NaN.
pub(crate) fn percentage(column: &str, made: i64, attempted: i64) -> ScrapeResult<f64> {
    if attempted <= 0 {
        return Err(ScrapeError::FieldParse {
            column: column.to_string(),
            context: format!("{made} made with {attempted} attempts"),
        });
    }
    Ok(100.0 * made as f64 / attempted as f64)
}
