//! Staffing planner CLI.
//!
//! Reads a call-requirements CSV and prints the hourly agent schedule.
//!
//! ```bash
//! staffing-plan --input requirements.csv --utilization 0.85 --format csv --output outputs/day.csv
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use staffing_grid::parsing::parse_requirements_file;
use staffing_grid::services::{to_json, to_text, validate_utilization, write_csv, ExportFormat, Planner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan hourly agent staffing from call requirements", long_about = None)]
struct Args {
    /// Path to the requirements CSV
    #[arg(long)]
    input: PathBuf,

    /// Share of an agent-hour spent on calls, in (0, 1]
    #[arg(long, default_value = "1.0", value_parser = parse_utilization)]
    utilization: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Output file (only used with --format csv)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_utilization(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    validate_utilization(parsed).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let requirements = parse_requirements_file(&args.input)?;
    let schedule = Planner::new(args.utilization).plan(&requirements);

    match args.format {
        ExportFormat::Text => print!("{}", to_text(&schedule)),
        ExportFormat::Json => println!("{}", to_json(&schedule)?),
        ExportFormat::Csv => {
            let path = write_csv(&schedule, args.output.as_deref())?;
            println!("CSV output saved to {}", path.display());
        }
    }

    Ok(())
}
