//! CLI argument definitions for the standard definition analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stdef",
    version,
    about = "Validate delimited text lines against a standard definition",
    long_about = "Validate fixed-structure delimited text lines against a declarative\n\
                  standard definition.\n\n\
                  Produces a row-per-field CSV report and a human-readable text summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze an input file and generate the report and summary artifacts.
    Analyze(AnalyzeArgs),

    /// List the sections declared in a standard definition.
    Sections(SectionsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the input file, one delimited record per line.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Path to the standard definition JSON file
    /// (default: standard_definition.json, or $STDEF_STANDARD_FILE).
    #[arg(long = "standard", value_name = "FILE")]
    pub standard: Option<PathBuf>,

    /// Output directory for generated artifacts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "parsed")]
    pub output_dir: PathBuf,

    /// Skip the CSV report artifact.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Skip the text summary artifact.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Log and skip lines that fail tokenization or section resolution
    /// instead of aborting the run.
    #[arg(long = "skip-invalid-lines")]
    pub skip_invalid_lines: bool,
}

#[derive(Parser)]
pub struct SectionsArgs {
    /// Path to the standard definition JSON file
    /// (default: standard_definition.json, or $STDEF_STANDARD_FILE).
    #[arg(long = "standard", value_name = "FILE")]
    pub standard: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
