use anyhow::{Context, Result};
use clap::Parser;
use sendero::cli::{Cli, CsvTable, OutputFormat};
use sendero::{csv_output, json_output, pipeline, sample, text_output};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read the event log text: the given file, or the bundled invoice
/// sample when no path was supplied.
fn read_log(args: &Cli) -> Result<String> {
    match &args.log {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event log {}", path.display())),
        None => {
            tracing::info!("no log path given; analysing the bundled invoice sample");
            Ok(sample::INVOICE_LOG.to_string())
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.short_gap_minutes < 0.0 {
        anyhow::bail!(
            "Invalid value for --short-gap-minutes: {} (must be >= 0)",
            args.short_gap_minutes
        );
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let text = read_log(&args)?;
    let analysis = pipeline::analyze(&text, &args.options())?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", text_output::render(&analysis, args.preview_rows));
        }
        OutputFormat::Json => {
            let output = json_output::JsonOutput::from_analysis(&analysis);
            println!("{}", output.to_json()?);
        }
        OutputFormat::Csv => {
            let table = match args.table {
                CsvTable::Edges => csv_output::edges_csv(&analysis.dfg),
                CsvTable::Durations => csv_output::durations_csv(&analysis.bottlenecks),
            };
            print!("{}", table);
        }
    }

    Ok(())
}
