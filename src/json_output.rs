//! JSON output format for analysis results
//!
//! Machine-readable rendition of one analysis run, versioned so
//! downstream consumers can detect layout changes.

use serde::{Deserialize, Serialize};

use crate::pipeline::ProcessAnalysis;

/// A weighted edge of the directly-follows graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEdge {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// One case and its ordered pathway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCase {
    pub case_id: String,
    /// Number of events in the case
    pub length: usize,
    /// Activities joined with " -> "
    pub pathway: String,
}

/// Start and end activity sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBoundaries {
    pub start: Vec<String>,
    pub end: Vec<String>,
}

/// One row of the bottleneck ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBottleneck {
    pub activity: String,
    pub mean_hours: f64,
    pub samples: usize,
    pub total_hours: f64,
}

/// An implausibly short inter-event gap flagged for review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonShortGap {
    pub case_id: String,
    pub activity: String,
    /// 1-based input line of the event that opened the gap
    pub line: usize,
    pub hours: f64,
}

/// A row dropped during validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonInvalidRow {
    pub line: usize,
    pub reason: String,
}

/// Validation outcome for the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonValidation {
    pub total_rows: usize,
    pub valid_events: usize,
    pub dropped_rows: usize,
    /// Per-row defects (omitted when the log was clean)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<Vec<JsonInvalidRow>>,
}

/// Headline counts for the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub cases: usize,
    pub events: usize,
    pub edges: usize,
    pub transitions: u64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub summary: JsonSummary,
    pub cases: Vec<JsonCase>,
    pub edges: Vec<JsonEdge>,
    pub boundaries: JsonBoundaries,
    pub bottlenecks: Vec<JsonBottleneck>,
    /// Flagged gaps (omitted when none were found)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_gaps: Option<Vec<JsonShortGap>>,
    pub validation: JsonValidation,
}

impl JsonOutput {
    /// Build the JSON structure from one analysis run.
    pub fn from_analysis(analysis: &ProcessAnalysis) -> Self {
        let cases = analysis
            .traces
            .iter()
            .map(|trace| JsonCase {
                case_id: trace.case_id.clone(),
                length: trace.len(),
                pathway: trace.pathway(),
            })
            .collect();

        let edges = analysis
            .dfg
            .edges()
            .into_iter()
            .map(|edge| JsonEdge {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            })
            .collect();

        let bottlenecks = analysis
            .bottlenecks
            .iter()
            .map(|d| JsonBottleneck {
                activity: d.activity.clone(),
                mean_hours: d.mean_hours,
                samples: d.samples,
                total_hours: d.total_hours,
            })
            .collect();

        let short_gaps = if analysis.short_gaps.is_empty() {
            None
        } else {
            Some(
                analysis
                    .short_gaps
                    .iter()
                    .map(|gap| JsonShortGap {
                        case_id: gap.case_id.clone(),
                        activity: gap.activity.clone(),
                        line: gap.line,
                        hours: gap.hours,
                    })
                    .collect(),
            )
        };

        let invalid = if analysis.report.invalid.is_empty() {
            None
        } else {
            Some(
                analysis
                    .report
                    .invalid
                    .iter()
                    .map(|row| JsonInvalidRow {
                        line: row.line,
                        reason: row.defect.to_string(),
                    })
                    .collect(),
            )
        };

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "sendero-json-v1".to_string(),
            summary: JsonSummary {
                cases: analysis.case_count(),
                events: analysis.event_count(),
                edges: analysis.dfg.edge_count(),
                transitions: analysis.dfg.total_transitions(),
            },
            cases,
            edges,
            boundaries: JsonBoundaries {
                start: analysis.boundaries.start.clone(),
                end: analysis.boundaries.end.clone(),
            },
            bottlenecks,
            short_gaps,
            validation: JsonValidation {
                total_rows: analysis.report.total_rows,
                valid_events: analysis.report.valid_count(),
                dropped_rows: analysis.report.dropped_count(),
                invalid,
            },
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{analyze, AnalyzeOptions};
    use crate::sample::INVOICE_LOG;

    fn invoice_output() -> JsonOutput {
        let analysis = analyze(INVOICE_LOG, &AnalyzeOptions::default()).unwrap();
        JsonOutput::from_analysis(&analysis)
    }

    #[test]
    fn test_json_output_shape() {
        let output = invoice_output();

        assert_eq!(output.format, "sendero-json-v1");
        assert_eq!(output.summary.cases, 4);
        assert_eq!(output.summary.events, 30);
        assert_eq!(output.summary.edges, 13);
        assert_eq!(output.summary.transitions, 26);
        assert_eq!(output.cases.len(), 4);
        assert_eq!(output.edges.len(), 13);
    }

    #[test]
    fn test_json_edges_sorted_by_weight() {
        let output = invoice_output();
        assert_eq!(output.edges[0].weight, 4);
        assert!(output
            .edges
            .windows(2)
            .all(|pair| pair[0].weight >= pair[1].weight));
    }

    #[test]
    fn test_json_serialization() {
        let json = invoice_output().to_json().unwrap();

        assert!(json.contains("\"format\": \"sendero-json-v1\""));
        assert!(json.contains("\"from\": \"Start\""));
        assert!(json.contains("\"activity\": \"Approve Invoice\""));
        assert!(json.contains("\"mean_hours\": 16.81"));
    }

    #[test]
    fn test_optional_fields_omitted_when_clean() {
        let json = invoice_output().to_json().unwrap();

        // The clean sample has no flagged gaps and no invalid rows.
        assert!(!json.contains("short_gaps"));
        assert!(!json.contains("\"invalid\""));
    }

    #[test]
    fn test_invalid_rows_included_when_present() {
        let text = "case_id,activity,timestamp\n\
                    1,Start,2022-01-01 08:00:00\n\
                    1,Broken,not a date\n\
                    1,End,2022-01-01 09:00:00\n";
        let analysis = analyze(text, &AnalyzeOptions::default()).unwrap();
        let output = JsonOutput::from_analysis(&analysis);

        assert_eq!(output.validation.dropped_rows, 1);
        let invalid = output.validation.invalid.unwrap();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].line, 3);
    }

    #[test]
    fn test_pathway_strings() {
        let output = invoice_output();
        let case_1 = output.cases.iter().find(|c| c.case_id == "1").unwrap();

        assert_eq!(case_1.length, 7);
        assert!(case_1.pathway.starts_with("Start -> Receive Invoice"));
        assert!(case_1.pathway.ends_with("Pay Invoice -> End"));
    }

    #[test]
    fn test_round_trip() {
        let output = invoice_output();
        let json = output.to_json().unwrap();
        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.summary.transitions, 26);
        assert_eq!(parsed.edges.len(), output.edges.len());
        assert!(parsed.short_gaps.is_none());
    }
}
