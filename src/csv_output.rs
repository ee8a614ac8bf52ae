//! CSV output format for analysis results
//!
//! Two flat tables for spreadsheet analysis and machine parsing: the
//! weighted edge list and the per-activity duration summary.

use crate::bottleneck::ActivityDuration;
use crate::dfg::Dfg;

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the weighted edge list, heaviest edge first.
pub fn edges_csv(dfg: &Dfg) -> String {
    let mut output = String::new();
    output.push_str("from,to,weight\n");

    for edge in dfg.edges() {
        output.push_str(&escape_field(&edge.from));
        output.push(',');
        output.push_str(&escape_field(&edge.to));
        output.push(',');
        output.push_str(&edge.weight.to_string());
        output.push('\n');
    }

    output
}

/// Render the bottleneck ranking, slowest activity first.
pub fn durations_csv(bottlenecks: &[ActivityDuration]) -> String {
    let mut output = String::new();
    output.push_str("activity,mean_hours,samples,total_hours\n");

    for duration in bottlenecks {
        output.push_str(&escape_field(&duration.activity));
        output.push_str(&format!(
            ",{:.2},{},{:.2}\n",
            duration.mean_hours, duration.samples, duration.total_hours
        ));
    }

    output
}
