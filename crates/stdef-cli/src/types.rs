//! Result types shared between the commands and the run summary printer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use stdef_model::ErrorCode;

/// One line that failed tokenization or section resolution and was
/// skipped under `--skip-invalid-lines`.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    /// 1-based position in the input file.
    pub line_number: usize,
    pub reason: String,
}

/// Outcome of one `analyze` run.
#[derive(Debug, Default)]
pub struct AnalysisResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub report_path: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
    /// Lines that produced field records.
    pub lines_processed: usize,
    pub lines_skipped: Vec<SkippedLine>,
    /// Lines whose extra raw fields were dropped.
    pub truncated_lines: usize,
    /// Total field records written.
    pub records: usize,
    pub code_counts: BTreeMap<ErrorCode, usize>,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        !self.lines_skipped.is_empty()
    }
}
