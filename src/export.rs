//! Tabular export of a finished run.

use crate::models::FormattedDate;
use crate::oracle::DateOracle;
use crate::services::evolution::{EvolutionOutcome, Partition};
use std::io;
use std::path::Path;
use tracing::instrument;

pub const HEADER: [&str; 3] = ["Date Type", "Date Value", "Date Category"];
const BOUNDARY: &str = "Boundary";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Io error: {0}")]
    Io(#[from] io::Error),
}

fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    oracle: &dyn DateOracle,
    tag: &str,
    dates: &[FormattedDate],
) -> Result<(), Error> {
    for date in dates {
        let category = oracle.category_of(&date.candidate());
        writer.write_record([tag, date.as_str(), category.label()])?;
    }

    Ok(())
}

/// Writes the first `limit` valid and invalid dates, then every boundary date.
///
/// The category column is recomputed with `oracle` for each row.
#[instrument(level = "debug", skip(writer, oracle, outcome))]
pub fn write_test_cases<W: io::Write>(
    writer: W,
    oracle: &dyn DateOracle,
    outcome: &EvolutionOutcome,
    limit: usize,
) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    let valid = &outcome.valid[..limit.min(outcome.valid.len())];
    let invalid = &outcome.invalid[..limit.min(outcome.invalid.len())];

    write_rows(&mut writer, oracle, &Partition::Valid.to_string(), valid)?;
    write_rows(&mut writer, oracle, &Partition::Invalid.to_string(), invalid)?;
    write_rows(&mut writer, oracle, BOUNDARY, &outcome.edge_cases)?;

    writer.flush()?;
    Ok(())
}

#[instrument(level = "info", skip(path, oracle, outcome), fields(path = %path.as_ref().display()))]
pub fn save_test_cases<P: AsRef<Path>>(
    path: P,
    oracle: &dyn DateOracle,
    outcome: &EvolutionOutcome,
    limit: usize,
) -> Result<(), Error> {
    let file = std::fs::File::create(path.as_ref())?;
    write_test_cases(io::BufWriter::new(file), oracle, outcome, limit)?;

    tracing::info!("Test dates exported");
    Ok(())
}
