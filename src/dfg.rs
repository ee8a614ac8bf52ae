//! Directly-follows graph construction
//!
//! The DFG is the discovered process model: an edge A -> B with weight w
//! means activity B immediately followed activity A within some case, w
//! times across the log. Weights are plain counts; no normalisation, no
//! probabilities. Self-loops are legitimate edges.

use crate::sequence::CaseTrace;
use std::collections::{BTreeSet, HashMap};

/// Accumulated transition counts keyed by the ordered activity pair.
pub type TransitionCounts = HashMap<(String, String), u64>;

/// A weighted directed edge of the discovered process model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfgEdge {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

impl DfgEdge {
    /// An activity immediately followed by itself.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// The directly-follows graph of an event log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dfg {
    counts: TransitionCounts,
}

impl Dfg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the DFG from per-case traces.
    ///
    /// Each case of length n contributes exactly its n-1 adjacent pairs, so
    /// the weight total over the whole graph equals total events minus the
    /// number of cases.
    pub fn from_traces(traces: &[CaseTrace]) -> Self {
        let mut dfg = Self::new();
        for trace in traces {
            for pair in trace.events.windows(2) {
                dfg.record(&pair[0].activity, &pair[1].activity);
            }
        }
        tracing::info!(edges = dfg.edge_count(), "directly-follows graph built");
        dfg
    }

    /// Count one observed transition.
    pub fn record(&mut self, from: &str, to: &str) {
        *self
            .counts
            .entry((from.to_string(), to.to_string()))
            .or_insert(0) += 1;
    }

    /// Weight of an edge, 0 when the transition was never observed.
    pub fn weight(&self, from: &str, to: &str) -> u64 {
        self.counts
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all edge weights: the total number of observed transitions.
    pub fn total_transitions(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Distinct activity labels appearing in the graph, sorted.
    pub fn activities(&self) -> Vec<String> {
        let labels: BTreeSet<&String> = self
            .counts
            .keys()
            .flat_map(|(from, to)| [from, to])
            .collect();
        labels.into_iter().cloned().collect()
    }

    /// The weighted edge list, sorted for stable output: weight descending,
    /// ties by (from, to) ascending.
    pub fn edges(&self) -> Vec<DfgEdge> {
        let mut edges: Vec<DfgEdge> = self
            .counts
            .iter()
            .map(|((from, to), &weight)| DfgEdge {
                from: from.clone(),
                to: to.clone(),
                weight,
            })
            .collect();

        edges.sort_by(|a, b| {
            b.weight
                .cmp(&a.weight)
                .then_with(|| a.from.cmp(&b.from))
                .then_with(|| a.to.cmp(&b.to))
        });
        edges
    }
}
