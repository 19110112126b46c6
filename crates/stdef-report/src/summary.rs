use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use stdef_model::FieldRecord;

/// Append one line's formatted messages to the text summary, followed by
/// a blank separator line.
pub fn append_summary(path: &Path, records: &[FieldRecord]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open summary {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", record.message)
            .with_context(|| format!("write summary line to {}", path.display()))?;
    }
    writeln!(writer).with_context(|| format!("write summary separator to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush summary {}", path.display()))?;
    Ok(())
}
