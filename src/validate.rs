//! Event log validation: schema check, row parsing, stable ordering
//!
//! The validator is the single conformance boundary of the pipeline. Table
//! defects (missing columns) are fatal; row defects (bad timestamp, empty
//! identifier) drop the row and are collected for reporting, never raised.
//! Everything downstream can assume a clean, sorted `Vec<Event>`.

use crate::csv_input::{RawRecord, RawTable};
use crate::event::{parse_timestamp, Event};
use std::fmt;
use thiserror::Error;

/// Columns every event log must provide (after header normalisation).
pub const REQUIRED_COLUMNS: [&str; 3] = ["case_id", "activity", "timestamp"];

/// Fatal, table-scoped validation failures.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("event log is missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("event log has no header row")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, SchemaError>;

/// Why a row was excluded from analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum RowDefect {
    /// Fewer fields than the header declares.
    ShortRow { expected: usize, actual: usize },
    /// case_id empty after trimming.
    EmptyCaseId,
    /// activity empty after trimming.
    EmptyActivity,
    /// Timestamp did not match any candidate layout.
    BadTimestamp { raw: String },
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRow { expected, actual } => {
                write!(f, "expected {expected} fields, found {actual}")
            }
            Self::EmptyCaseId => write!(f, "empty case_id"),
            Self::EmptyActivity => write!(f, "empty activity"),
            Self::BadTimestamp { raw } => write!(f, "unparseable timestamp \"{raw}\""),
        }
    }
}

/// A dropped row, kept verbatim for the diagnostics report.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRow {
    pub line: usize,
    pub fields: Vec<String>,
    pub defect: RowDefect,
}

/// Row-level outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Data rows seen (header excluded).
    pub total_rows: usize,
    /// Rows dropped, in input order.
    pub invalid: Vec<InvalidRow>,
}

impl ValidationReport {
    pub fn dropped_count(&self) -> usize {
        self.invalid.len()
    }

    pub fn valid_count(&self) -> usize {
        self.total_rows - self.invalid.len()
    }
}

/// A validated event table, sorted and ready for discovery.
#[derive(Debug, Clone)]
pub struct ValidatedLog {
    /// Events sorted by (case_id, timestamp); ties keep input order.
    pub events: Vec<Event>,
    pub report: ValidationReport,
}

/// Validate a raw table into a sorted event list plus a defect report.
///
/// Fails only on table-scoped defects: no header at all, or a required
/// column absent. Row-scoped defects drop the row and continue.
pub fn validate(table: &RawTable) -> Result<ValidatedLog> {
    if table.headers.is_empty() {
        return Err(SchemaError::EmptyInput);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| table.column(col).is_none())
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { missing });
    }

    // Presence checked above.
    let case_col = table.column("case_id").unwrap_or_default();
    let activity_col = table.column("activity").unwrap_or_default();
    let timestamp_col = table.column("timestamp").unwrap_or_default();
    let width = 1 + case_col.max(activity_col).max(timestamp_col);

    let mut events = Vec::with_capacity(table.records.len());
    let mut report = ValidationReport {
        total_rows: table.records.len(),
        ..Default::default()
    };

    for record in &table.records {
        match check_row(record, width, case_col, activity_col, timestamp_col) {
            Ok(event) => events.push(event),
            Err(defect) => {
                tracing::debug!(line = record.line, %defect, "dropping row");
                report.invalid.push(InvalidRow {
                    line: record.line,
                    fields: record.fields.clone(),
                    defect,
                });
            }
        }
    }

    // Stable sort: equal (case_id, timestamp) keys keep their input order.
    events.sort_by(|a, b| {
        a.case_id
            .cmp(&b.case_id)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });

    if report.dropped_count() > 0 {
        tracing::warn!(
            dropped = report.dropped_count(),
            total = report.total_rows,
            "rows dropped during validation"
        );
    }
    tracing::info!(events = events.len(), "event log validated");

    Ok(ValidatedLog { events, report })
}

fn check_row(
    record: &RawRecord,
    width: usize,
    case_col: usize,
    activity_col: usize,
    timestamp_col: usize,
) -> std::result::Result<Event, RowDefect> {
    if record.fields.len() < width {
        return Err(RowDefect::ShortRow {
            expected: width,
            actual: record.fields.len(),
        });
    }

    let case_id = record.fields[case_col].trim();
    if case_id.is_empty() {
        return Err(RowDefect::EmptyCaseId);
    }

    let activity = record.fields[activity_col].trim();
    if activity.is_empty() {
        return Err(RowDefect::EmptyActivity);
    }

    let raw_ts = &record.fields[timestamp_col];
    let timestamp = parse_timestamp(raw_ts).ok_or_else(|| RowDefect::BadTimestamp {
        raw: raw_ts.trim().to_string(),
    })?;

    Ok(Event {
        case_id: case_id.to_string(),
        activity: activity.to_string(),
        timestamp,
        line: record.line,
    })
}
