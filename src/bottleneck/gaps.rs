// Inter-event gap extraction
//
// Every event except the last of its case yields one gap: the elapsed
// hours until the case's next event, attributed to the activity the case
// was sitting at. The final event of a case has no successor and yields
// no row.

use crate::sequence::CaseTrace;

/// One measured wait between consecutive events of a case.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGap {
    /// Case the wait belongs to
    pub case_id: String,

    /// Activity the case was at while waiting
    pub activity: String,

    /// 1-based source line of the event that opened the gap
    pub line: usize,

    /// Elapsed hours until the next event; non-negative once events are
    /// sorted by timestamp within the case
    pub hours: f64,
}

impl EventGap {
    pub fn is_negative(&self) -> bool {
        self.hours < 0.0
    }
}

/// Extract all inter-event gaps from sequenced cases.
///
/// A case of length n contributes n-1 gaps; a single-event case
/// contributes none.
pub fn case_gaps(traces: &[CaseTrace]) -> Vec<EventGap> {
    let mut gaps = Vec::new();

    for trace in traces {
        for pair in trace.events.windows(2) {
            let delta = pair[1].timestamp - pair[0].timestamp;
            gaps.push(EventGap {
                case_id: trace.case_id.clone(),
                activity: pair[0].activity.clone(),
                line: pair[0].line,
                hours: delta.num_milliseconds() as f64 / 3_600_000.0,
            });
        }
    }

    tracing::debug!(gaps = gaps.len(), "inter-event gaps extracted");
    gaps
}

/// Gaps below the plausibility threshold, negatives included.
///
/// Flagged gaps remain in the aggregates. This list feeds the diagnostics
/// report so suspicious rows can be reviewed, not silently excluded.
pub fn flag_short_gaps(gaps: &[EventGap], threshold_hours: f64) -> Vec<EventGap> {
    let flagged: Vec<EventGap> = gaps
        .iter()
        .filter(|g| g.hours < threshold_hours)
        .cloned()
        .collect();

    if !flagged.is_empty() {
        tracing::warn!(
            flagged = flagged.len(),
            threshold_hours,
            "implausibly short inter-event gaps detected"
        );
    }
    flagged
}
