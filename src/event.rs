//! Event log record types and timestamp parsing
//!
//! The `Event` is the single typed boundary of the pipeline: everything that
//! survives validation is an `Event`, and every downstream stage consumes
//! `&[Event]` without looking back at the raw table.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried in order when parsing a timestamp field.
///
/// Event logs exported from spreadsheets and ERP systems rarely agree on one
/// layout, so parsing tries each candidate and takes the first match instead
/// of assuming a fixed format.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Date-only layouts; a bare date parses as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// A single validated event-log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Opaque case identifier grouping events into one process instance.
    pub case_id: String,
    /// Activity label, non-empty after validation.
    pub activity: String,
    /// When the activity was recorded.
    pub timestamp: NaiveDateTime,
    /// 1-based input line the record came from (0 for synthetic events).
    pub line: usize,
}

impl Event {
    /// Create an event without input provenance (tests and generators).
    pub fn new(
        case_id: impl Into<String>,
        activity: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            activity: activity.into(),
            timestamp,
            line: 0,
        }
    }
}

/// Parse a timestamp field against the candidate layouts.
///
/// Tries full date-times first, then RFC 3339 (offsets are normalised to the
/// UTC wall clock), then bare dates. Returns `None` when nothing matches;
/// the validator turns that into a dropped-row defect.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_datetime() {
        let ts = parse_timestamp("2022-01-01 08:30:00").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 08:30:00");
    }

    #[test]
    fn test_parse_iso_t_separator() {
        let ts = parse_timestamp("2022-01-01T08:30:00").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 08:30:00");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = parse_timestamp("2022-01-01 08:30:00.250").unwrap();
        assert_eq!(ts.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_minutes_only() {
        let ts = parse_timestamp("2022-01-01 08:30").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 08:30:00");
    }

    #[test]
    fn test_parse_rfc3339_offset_normalised() {
        let ts = parse_timestamp("2022-01-01T10:30:00+02:00").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 08:30:00");
    }

    #[test]
    fn test_parse_slash_layout() {
        let ts = parse_timestamp("2022/01/01 08:30:00").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 08:30:00");
    }

    #[test]
    fn test_parse_day_first_layout() {
        let ts = parse_timestamp("31/01/2022 08:30:00").unwrap();
        assert_eq!(ts.to_string(), "2022-01-31 08:30:00");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let ts = parse_timestamp("2022-01-01").unwrap();
        assert_eq!(ts.to_string(), "2022-01-01 00:00:00");
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(parse_timestamp("  2022-01-01 08:00:00  ").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2022-13-40 99:99:99").is_none());
    }

    #[test]
    fn test_event_ordering_by_timestamp() {
        let t1 = parse_timestamp("2022-01-01 08:00:00").unwrap();
        let t2 = parse_timestamp("2022-01-01 09:00:00").unwrap();
        let a = Event::new("1", "Start", t1);
        let b = Event::new("1", "End", t2);
        assert!(a.timestamp < b.timestamp);
    }
}
