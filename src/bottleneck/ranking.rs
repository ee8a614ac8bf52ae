// Mean dwell-time ranking
//
// Groups gaps by activity and ranks by mean hours, slowest first. Events
// carrying a boundary label are dropped before grouping so synthetic
// Start/End markers never top the table.

use crate::bottleneck::gaps::EventGap;
use std::collections::HashMap;

/// Aggregated wait statistics for one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDuration {
    /// Activity label
    pub activity: String,

    /// Mean hours until the next event, rounded to two decimals
    pub mean_hours: f64,

    /// Number of gaps measured
    pub samples: usize,

    /// Summed hours across all gaps, rounded to two decimals
    pub total_hours: f64,
}

/// Round to two decimal places, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Rank activities by mean dwell time, descending.
///
/// Ties on the unrounded mean break by activity label so the ranking is
/// total and rerunning the pipeline reproduces it byte for byte.
pub fn rank_bottlenecks(gaps: &[EventGap], boundary_labels: &[String]) -> Vec<ActivityDuration> {
    let mut grouped: HashMap<&str, Vec<f32>> = HashMap::new();
    for gap in gaps {
        if boundary_labels.iter().any(|label| label == &gap.activity) {
            continue;
        }
        grouped
            .entry(gap.activity.as_str())
            .or_default()
            .push(gap.hours as f32);
    }

    // SIMD-backed mean and sum per activity
    let mut ranking: Vec<(String, f64, usize, f64)> = grouped
        .into_iter()
        .map(|(activity, hours)| {
            let v = trueno::Vector::from_slice(&hours);
            let mean = f64::from(v.mean().unwrap_or(0.0));
            let total = f64::from(v.sum().unwrap_or(0.0));
            (activity.to_string(), mean, hours.len(), total)
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    tracing::info!(activities = ranking.len(), "bottleneck ranking computed");

    ranking
        .into_iter()
        .map(|(activity, mean, samples, total)| ActivityDuration {
            activity,
            mean_hours: round2(mean),
            samples,
            total_hours: round2(total),
        })
        .collect()
}
