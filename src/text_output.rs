//! Plain-text report format
//!
//! The default human-facing output: numbered sections walking from a
//! preview of the validated log through the discovered model and case
//! pathways to the bottleneck ranking and run diagnostics. Variable-width
//! activity labels go last on each line so the numeric columns stay
//! aligned.

use crate::pipeline::ProcessAnalysis;

/// How many validated events the preview section shows by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Invalid rows and short gaps listed before the report truncates.
const MAX_DIAGNOSTIC_ROWS: usize = 20;

/// Render the full report.
pub fn render(analysis: &ProcessAnalysis, preview_rows: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Process discovery report: {} cases, {} events\n",
        analysis.case_count(),
        analysis.event_count()
    ));

    if analysis.is_empty() {
        out.push_str("\nWARNING: no valid events remain after validation; nothing to analyse.\n");
        write_diagnostics(&mut out, analysis);
        return out;
    }

    write_preview(&mut out, analysis, preview_rows);
    write_model(&mut out, analysis);
    write_pathways(&mut out, analysis);
    write_bottlenecks(&mut out, analysis);
    write_diagnostics(&mut out, analysis);

    out
}

fn write_preview(out: &mut String, analysis: &ProcessAnalysis, preview_rows: usize) {
    let shown = preview_rows.min(analysis.event_count());
    out.push_str(&format!(
        "\n1. Event log preview (first {} of {})\n",
        shown,
        analysis.event_count()
    ));
    out.push_str("   case_id  timestamp            activity\n");

    for event in analysis.events.iter().take(shown) {
        out.push_str(&format!(
            "   {:<7}  {}  {}\n",
            event.case_id,
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.activity
        ));
    }
}

fn write_model(out: &mut String, analysis: &ProcessAnalysis) {
    out.push_str(&format!(
        "\n2. Directly-follows graph ({} edges, {} transitions)\n",
        analysis.dfg.edge_count(),
        analysis.dfg.total_transitions()
    ));
    out.push_str("   weight  transition\n");

    for edge in analysis.dfg.edges() {
        out.push_str(&format!(
            "   {:>6}  {} -> {}\n",
            edge.weight, edge.from, edge.to
        ));
    }

    out.push_str(&format!(
        "   Start activities: {}\n",
        analysis.boundaries.start.join(", ")
    ));
    out.push_str(&format!(
        "   End activities:   {}\n",
        analysis.boundaries.end.join(", ")
    ));
}

fn write_pathways(out: &mut String, analysis: &ProcessAnalysis) {
    out.push_str("\n3. Case pathways\n");
    for trace in &analysis.traces {
        out.push_str(&format!("   {}: {}\n", trace.case_id, trace.pathway()));
    }
}

fn write_bottlenecks(out: &mut String, analysis: &ProcessAnalysis) {
    out.push_str("\n4. Bottleneck ranking (mean hours until next event)\n");

    if analysis.bottlenecks.is_empty() {
        out.push_str("   No activities outside the boundary labels; nothing to rank.\n");
        return;
    }

    out.push_str("   mean_hours  samples  activity\n");
    for duration in &analysis.bottlenecks {
        out.push_str(&format!(
            "   {:>10.2}  {:>7}  {}\n",
            duration.mean_hours, duration.samples, duration.activity
        ));
    }
}

fn write_diagnostics(out: &mut String, analysis: &ProcessAnalysis) {
    out.push_str("\n5. Diagnostics\n");
    out.push_str(&format!(
        "   {} of {} rows dropped during validation\n",
        analysis.report.dropped_count(),
        analysis.report.total_rows
    ));

    for row in analysis.report.invalid.iter().take(MAX_DIAGNOSTIC_ROWS) {
        out.push_str(&format!("   line {}: {}\n", row.line, row.defect));
    }
    if analysis.report.invalid.len() > MAX_DIAGNOSTIC_ROWS {
        out.push_str(&format!(
            "   ... and {} more\n",
            analysis.report.invalid.len() - MAX_DIAGNOSTIC_ROWS
        ));
    }

    if analysis.short_gaps.is_empty() {
        out.push_str("   No implausibly short inter-event gaps\n");
    } else {
        out.push_str(&format!(
            "   {} implausibly short inter-event gaps:\n",
            analysis.short_gaps.len()
        ));
        for gap in analysis.short_gaps.iter().take(MAX_DIAGNOSTIC_ROWS) {
            out.push_str(&format!(
                "   case {} at {} (line {}): {:.4} h\n",
                gap.case_id, gap.activity, gap.line, gap.hours
            ));
        }
        if analysis.short_gaps.len() > MAX_DIAGNOSTIC_ROWS {
            out.push_str(&format!(
                "   ... and {} more\n",
                analysis.short_gaps.len() - MAX_DIAGNOSTIC_ROWS
            ));
        }
    }
}
