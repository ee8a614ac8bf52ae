//! Per-case sequencing of validated events
//!
//! Partitions the sorted event table into cases and exposes each case's
//! ordered activity sequence. Everything downstream (DFG construction,
//! boundary detection, duration analysis) walks these traces; nothing mutates
//! them.

use crate::event::Event;

/// One case: the ordered events sharing a case_id.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseTrace {
    pub case_id: String,
    /// Events in chronological order (input order on equal timestamps).
    pub events: Vec<Event>,
}

impl CaseTrace {
    /// Activity labels in execution order.
    pub fn activities(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.activity.as_str())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The case pathway as a display string, e.g. `"Start -> Pay -> End"`.
    pub fn pathway(&self) -> String {
        self.activities().collect::<Vec<_>>().join(" -> ")
    }
}

/// Partition a sorted event table into per-case traces.
///
/// Input must already be sorted by (case_id, timestamp); the validator
/// guarantees that. Cases come out in ascending case_id order, and a case
/// with zero valid events simply does not exist.
pub fn sequence_cases(events: &[Event]) -> Vec<CaseTrace> {
    let mut traces: Vec<CaseTrace> = Vec::new();

    for event in events {
        match traces.last_mut() {
            Some(trace) if trace.case_id == event.case_id => trace.events.push(event.clone()),
            _ => traces.push(CaseTrace {
                case_id: event.case_id.clone(),
                events: vec![event.clone()],
            }),
        }
    }

    tracing::debug!(cases = traces.len(), "sequenced event table");
    traces
}
