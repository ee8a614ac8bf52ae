//! CLI argument parsing for Sendero

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::pipeline::AnalyzeOptions;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Table rendered when the CSV format is selected
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CsvTable {
    /// Weighted directly-follows edge list
    Edges,
    /// Per-activity duration summary
    Durations,
}

#[derive(Parser, Debug)]
#[command(name = "sendero")]
#[command(version)]
#[command(about = "Process mining for CSV event logs", long_about = None)]
pub struct Cli {
    /// CSV event log to analyse (bundled invoice sample when omitted)
    #[arg(value_name = "LOG")]
    pub log: Option<PathBuf>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Table to render with --format csv
    #[arg(long = "table", value_enum, default_value = "edges")]
    pub table: CsvTable,

    /// Comma-separated activity labels treated as case boundaries
    #[arg(long = "boundary", value_name = "LABELS", default_value = "Start,End")]
    pub boundary: String,

    /// Flag inter-event gaps shorter than this many minutes
    #[arg(
        long = "short-gap-minutes",
        value_name = "MINUTES",
        default_value = "1.0"
    )]
    pub short_gap_minutes: f64,

    /// Validated events shown in the text preview section
    #[arg(long = "preview-rows", value_name = "ROWS", default_value = "5")]
    pub preview_rows: usize,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Boundary labels split out of the comma-separated flag value.
    pub fn boundary_labels(&self) -> Vec<String> {
        self.boundary
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Analysis options assembled from the flags.
    pub fn options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            boundary_labels: self.boundary_labels(),
            short_gap_hours: self.short_gap_minutes / 60.0,
        }
    }
}
