//! Start and end boundary detection
//!
//! A start activity is one that opens at least one case; an end activity
//! closes at least one. Both sets are kept sorted and duplicate-free so
//! reports are stable and membership checks stay cheap.

use crate::sequence::CaseTrace;
use std::collections::BTreeSet;

/// The entry and exit activities observed across all cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundarySets {
    /// Activities that begin at least one case, sorted.
    pub start: Vec<String>,
    /// Activities that finish at least one case, sorted.
    pub end: Vec<String>,
}

impl BoundarySets {
    /// Collect the first and last activity of every case.
    ///
    /// A single-event case lands in both sets.
    pub fn from_traces(traces: &[CaseTrace]) -> Self {
        let mut start = BTreeSet::new();
        let mut end = BTreeSet::new();

        for trace in traces {
            if let Some(first) = trace.events.first() {
                start.insert(first.activity.clone());
            }
            if let Some(last) = trace.events.last() {
                end.insert(last.activity.clone());
            }
        }

        Self {
            start: start.into_iter().collect(),
            end: end.into_iter().collect(),
        }
    }

    pub fn is_start(&self, activity: &str) -> bool {
        self.start.binary_search_by(|s| s.as_str().cmp(activity)).is_ok()
    }

    pub fn is_end(&self, activity: &str) -> bool {
        self.end.binary_search_by(|s| s.as_str().cmp(activity)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{parse_timestamp, Event};

    fn trace_of(case: &str, activities: &[&str]) -> CaseTrace {
        let events = activities
            .iter()
            .enumerate()
            .map(|(i, activity)| {
                let ts = format!("2022-01-01 {:02}:00:00", 8 + i);
                Event::new(case, *activity, parse_timestamp(&ts).unwrap())
            })
            .collect();
        CaseTrace {
            case_id: case.to_string(),
            events,
        }
    }

    #[test]
    fn test_first_and_last_collected() {
        let traces = vec![
            trace_of("1", &["Start", "Work", "End"]),
            trace_of("2", &["Start", "Ship"]),
        ];
        let sets = BoundarySets::from_traces(&traces);

        assert_eq!(sets.start, vec!["Start"]);
        assert_eq!(sets.end, vec!["End", "Ship"]);
    }

    #[test]
    fn test_sets_sorted_and_deduped() {
        let traces = vec![
            trace_of("1", &["B", "x", "Z"]),
            trace_of("2", &["A", "x", "Z"]),
            trace_of("3", &["B", "x", "Y"]),
        ];
        let sets = BoundarySets::from_traces(&traces);

        assert_eq!(sets.start, vec!["A", "B"]);
        assert_eq!(sets.end, vec!["Y", "Z"]);
    }

    #[test]
    fn test_single_event_case_in_both_sets() {
        let traces = vec![trace_of("1", &["Only"])];
        let sets = BoundarySets::from_traces(&traces);

        assert_eq!(sets.start, vec!["Only"]);
        assert_eq!(sets.end, vec!["Only"]);
        assert!(sets.is_start("Only"));
        assert!(sets.is_end("Only"));
    }

    #[test]
    fn test_membership_checks() {
        let traces = vec![trace_of("1", &["Start", "Work", "End"])];
        let sets = BoundarySets::from_traces(&traces);

        assert!(sets.is_start("Start"));
        assert!(!sets.is_start("Work"));
        assert!(!sets.is_start("End"));
        assert!(sets.is_end("End"));
        assert!(!sets.is_end("Start"));
    }

    #[test]
    fn test_empty_traces() {
        let sets = BoundarySets::from_traces(&[]);
        assert!(sets.start.is_empty());
        assert!(sets.end.is_empty());
        assert!(!sets.is_start("anything"));
    }
}
