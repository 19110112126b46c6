use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use stdef_model::FieldRecord;

/// Append one line's records to the CSV report.
///
/// The header row is written only when the destination is newly created
/// or still empty; subsequent calls append data rows, so the report can
/// be built up line by line across the run.
pub fn append_report(path: &Path, records: &[FieldRecord]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open report {}", path.display()))?;
    let write_header = file
        .metadata()
        .with_context(|| format!("stat report {}", path.display()))?
        .len()
        == 0;

    let mut writer = WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write report row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush report {}", path.display()))?;
    Ok(())
}
