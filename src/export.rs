use crate::core::ScrapeResult;
use crate::model::PlayerRecord;
use log::info;
use std::path::Path;

/// Column order consumed by the downstream splitter and trainers.
pub const HEADER: [&str; 9] = [
    "name",
    "ncaa_fg3a",
    "ncaa_fg3_pct",
    "ncaa_ft_pct",
    "ncaa_sos",
    "ncaa_team_fg3a_avg",
    "nba_avg_team_ortg",
    "nba_relative_team_fg3a",
    "nba_fg3_pct",
];

/// Writes the dataset: the fixed header, then one row per record in the
/// order given. The header goes out even when there are no records.
pub fn export<P: AsRef<Path>>(records: &[PlayerRecord], path: P) -> ScrapeResult<()> {
    info!(
        "Exporting {} record(s) to {}",
        records.len(),
        path.as_ref().display()
    );

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hoopscrape-{}-{}.csv", tag, std::process::id()))
    }

    fn record(name: &str) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            ncaa_fg3a: 619,
            ncaa_fg3_pct: 39.0,
            ncaa_ft_pct: 83.8,
            ncaa_sos: 7.34,
            ncaa_team_fg3a_avg: 21.0,
            nba_avg_team_ortg: 110.3,
            nba_relative_team_fg3a: 1.25,
            nba_fg3_pct: 43.0,
        }
    }

    #[test]
    fn zero_records_yields_header_only() {
        let path = temp_path("empty");
        export(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim_end(),
            "name,ncaa_fg3a,ncaa_fg3_pct,ncaa_ft_pct,ncaa_sos,ncaa_team_fg3a_avg,nba_avg_team_ortg,nba_relative_team_fg3a,nba_fg3_pct"
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rows_keep_processing_order() {
        let path = temp_path("order");
        export(&[record("Stephen Curry"), record("Klay Thompson")], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Stephen Curry,619,39.0,"));
        assert!(lines[2].starts_with("Klay Thompson,"));
        std::fs::remove_file(&path).ok();
    }
}
