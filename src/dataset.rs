use crate::core::ScrapeResult;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Splits an exported dataset into shuffled train/test files, preserving the
/// header in both. Returns (train rows, test rows).
pub fn split<P: AsRef<Path>>(
    input: P,
    train_path: P,
    test_path: P,
    test_fraction: f64,
) -> ScrapeResult<(usize, usize)> {
    split_with_rng(input, train_path, test_path, test_fraction, &mut rand::thread_rng())
}

pub fn split_with_rng<P: AsRef<Path>, R: Rng>(
    input: P,
    train_path: P,
    test_path: P,
    test_fraction: f64,
    rng: &mut R,
) -> ScrapeResult<(usize, usize)> {
    let mut reader = csv::Reader::from_path(input)?;
    let header = reader.headers()?.clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row?);
    }

    rows.shuffle(rng);
    let test_count = (rows.len() as f64 * test_fraction).round() as usize;
    let (test_rows, train_rows) = rows.split_at(test_count.min(rows.len()));

    let mut train_writer = csv::Writer::from_path(train_path)?;
    train_writer.write_record(&header)?;
    for row in train_rows {
        train_writer.write_record(row)?;
    }
    train_writer.flush()?;

    let mut test_writer = csv::Writer::from_path(test_path)?;
    test_writer.write_record(&header)?;
    for row in test_rows {
        test_writer.write_record(row)?;
    }
    test_writer.flush()?;

    info!(
        "Split {} rows into {} train / {} test",
        rows.len(),
        train_rows.len(),
        test_rows.len()
    );
    Ok((train_rows.len(), test_rows.len()))
}
