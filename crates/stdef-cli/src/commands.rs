//! Command implementations for the `stdef` CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use stdef_report::{append_report, append_summary, ensure_output_dir, remove_if_exists};
use stdef_standards::{default_standard_path, load_standard_definition};
use stdef_validate::{LineProcessor, Process};

use crate::cli::{AnalyzeArgs, SectionsArgs};
use crate::summary::apply_table_style;
use crate::types::{AnalysisResult, SkippedLine};

const REPORT_FILE: &str = "report.csv";
const SUMMARY_FILE: &str = "summary.txt";

pub fn run_sections(args: &SectionsArgs) -> Result<()> {
    let standard_path = args.standard.clone().unwrap_or_else(default_standard_path);
    let definition =
        load_standard_definition(&standard_path).context("load standard definition")?;

    let mut table = Table::new();
    table.set_header(vec![
        "Section",
        "Sub-Section",
        "Expected DataType",
        "Max Length",
    ]);
    apply_table_style(&mut table);
    for section in definition.sections() {
        for constraint in &section.sub_sections {
            table.add_row(vec![
                section.key.clone(),
                constraint.key.clone(),
                constraint.data_type.to_string(),
                constraint.max_length.to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let span = info_span!("analyze", input = %args.input.display());
    let _guard = span.enter();

    let standard_path = args.standard.clone().unwrap_or_else(default_standard_path);
    let definition =
        load_standard_definition(&standard_path).context("load standard definition")?;

    ensure_output_dir(&args.output_dir)?;
    let report_path = (!args.no_report).then(|| args.output_dir.join(REPORT_FILE));
    let summary_path = (!args.no_summary).then(|| args.output_dir.join(SUMMARY_FILE));
    // Artifacts are regenerated from scratch each run; the writers append
    // line by line afterwards.
    if let Some(path) = &report_path {
        remove_if_exists(path)?;
    }
    if let Some(path) = &summary_path {
        remove_if_exists(path)?;
    }

    let mut result = AnalysisResult {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        report_path: report_path.clone(),
        summary_path: summary_path.clone(),
        ..AnalysisResult::default()
    };

    let file = File::open(&args.input)
        .with_context(|| format!("open input {}", args.input.display()))?;
    let reader = BufReader::new(file);
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line
            .with_context(|| format!("read line {line_number} of {}", args.input.display()))?;

        let outcome = match LineProcessor::new(&line, &definition).process() {
            Ok(outcome) => outcome,
            Err(line_error) => {
                if args.skip_invalid_lines {
                    warn!(line_number, %line_error, "skipping invalid line");
                    result.lines_skipped.push(SkippedLine {
                        line_number,
                        reason: line_error.to_string(),
                    });
                    continue;
                }
                return Err(anyhow::Error::new(line_error)
                    .context(format!("line {line_number} of {}", args.input.display())));
            }
        };

        if let Some(mismatch) = outcome.count_mismatch {
            warn!(
                line_number,
                section = %outcome.section_key,
                declared = mismatch.declared,
                supplied = mismatch.supplied,
                "more fields than declared sub-sections; extra fields dropped"
            );
            result.truncated_lines += 1;
        }

        if let Some(path) = &report_path {
            append_report(path, &outcome.records)?;
        }
        if let Some(path) = &summary_path {
            append_summary(path, &outcome.records)?;
        }

        result.lines_processed += 1;
        result.records += outcome.records.len();
        for record in &outcome.records {
            *result.code_counts.entry(record.code).or_default() += 1;
        }
    }

    info!(
        lines = result.lines_processed,
        records = result.records,
        skipped = result.lines_skipped.len(),
        "analysis complete"
    );
    Ok(result)
}
