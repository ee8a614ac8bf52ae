/// Discovery Pipeline Benchmarks
///
/// Measures each stage of process discovery in isolation plus the full
/// pipeline end-to-end on synthetic event logs of increasing size. These
/// benchmarks help detect performance regressions when the sequencing or
/// aggregation code changes.
use chrono::{Duration as TimeStep, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sendero::bottleneck::{case_gaps, rank_bottlenecks};
use sendero::csv_input::parse;
use sendero::dfg::Dfg;
use sendero::pipeline::{analyze, AnalyzeOptions};
use sendero::sequence::{sequence_cases, CaseTrace};
use sendero::validate::validate;
use std::time::Duration;

const ACTIVITIES: [&str; 6] = ["Receive", "Triage", "Review", "Approve", "Dispatch", "Close"];
const EVENTS_PER_CASE: usize = 10;
const CASE_COUNTS: [usize; 2] = [100, 1_000];

/// Build a CSV log with `cases` cases of ten events each. The timestamp
/// stride varies per case so gap durations are not all identical.
fn synthetic_log(cases: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2024, 3, 1)
        .expect("valid date")
        .and_hms_opt(8, 0, 0)
        .expect("valid time");
    let mut text = String::from("case_id,activity,timestamp\n");
    for case in 0..cases {
        let stride = 5 + (case % 7) as i64;
        for step in 0..EVENTS_PER_CASE {
            let stamp = base + TimeStep::minutes(stride * step as i64);
            text.push_str(&format!(
                "case-{},{},{}\n",
                case,
                ACTIVITIES[(case + step) % ACTIVITIES.len()],
                stamp.format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }
    text
}

fn traces_for(cases: usize) -> Vec<CaseTrace> {
    let log = validate(&parse(&synthetic_log(cases))).expect("synthetic log is valid");
    sequence_cases(&log.events)
}

/// Stage 1: CSV parsing plus schema validation and sorting
fn bench_parse_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_validate");
    group.measurement_time(Duration::from_secs(5));

    for cases in CASE_COUNTS {
        let text = synthetic_log(cases);
        group.throughput(Throughput::Elements((cases * EVENTS_PER_CASE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cases), &text, |b, text| {
            b.iter(|| {
                let log = validate(&parse(black_box(text))).expect("synthetic log is valid");
                black_box(log);
            });
        });
    }

    group.finish();
}

/// Stage 2: directly-follows graph construction from sequenced cases
fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");
    group.measurement_time(Duration::from_secs(5));

    for cases in CASE_COUNTS {
        let traces = traces_for(cases);
        group.throughput(Throughput::Elements((cases * EVENTS_PER_CASE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cases), &traces, |b, traces| {
            b.iter(|| {
                let dfg = Dfg::from_traces(black_box(traces));
                black_box(dfg.edges());
            });
        });
    }

    group.finish();
}

/// Stage 3: gap extraction and mean-duration bottleneck ranking
fn bench_bottleneck_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("bottleneck_ranking");
    group.measurement_time(Duration::from_secs(5));

    let boundaries = vec!["Start".to_string(), "End".to_string()];
    for cases in CASE_COUNTS {
        let traces = traces_for(cases);
        group.throughput(Throughput::Elements((cases * EVENTS_PER_CASE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cases), &traces, |b, traces| {
            b.iter(|| {
                let gaps = case_gaps(black_box(traces));
                black_box(rank_bottlenecks(&gaps, &boundaries));
            });
        });
    }

    group.finish();
}

/// Full pipeline: CSV text in, complete analysis out
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    let options = AnalyzeOptions::default();
    for cases in CASE_COUNTS {
        let text = synthetic_log(cases);
        group.throughput(Throughput::Elements((cases * EVENTS_PER_CASE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cases), &text, |b, text| {
            b.iter(|| {
                let analysis = analyze(black_box(text), &options).expect("synthetic log is valid");
                black_box(analysis);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_validate,
    bench_graph_construction,
    bench_bottleneck_ranking,
    bench_full_pipeline
);

criterion_main!(benches);
