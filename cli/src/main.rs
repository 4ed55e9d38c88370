use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use sprintchart_core::{ChartConfig, DEFAULT_BUCKET_WIDTH_WEEKS, DEFAULT_HORIZON_BUCKETS};
use sprintchart_extract::output::{format_records, format_rows, format_run};
use sprintchart_extract::{chart_rows, extract_outline_with_report};
use sprintchart_render::GridRenderer;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliOutputFormat> for sprintchart_extract::output::OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sprintchart")]
#[command(about = "Render sprint timeline charts from markdown plan documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a plan document into an xlsx sprint chart.
    Chart(ChartArgs),
    /// Extract outline records from a plan document.
    Extract(ExtractArgs),
    /// Print the row descriptors handed to the grid renderer.
    Rows(RowsArgs),
}

#[derive(Debug, Args)]
struct ChartArgs {
    /// Plan document to read.
    #[arg(long, default_value = "plan.md")]
    input: PathBuf,
    /// Output workbook path.
    #[arg(long, default_value = "sprint_chart.xlsx")]
    output: PathBuf,
    /// Number of sprint buckets in the chart.
    #[arg(long, default_value_t = DEFAULT_HORIZON_BUCKETS)]
    horizon: u32,
    /// Weeks covered by one sprint bucket.
    #[arg(long, default_value_t = DEFAULT_BUCKET_WIDTH_WEEKS)]
    bucket_width: u32,
    /// Worksheet name (default: "Sprint Plan").
    #[arg(long)]
    sheet_name: Option<String>,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Plan document to read.
    #[arg(long, default_value = "plan.md")]
    input: PathBuf,
    /// Also print the extraction report.
    #[arg(long)]
    with_report: bool,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct RowsArgs {
    /// Plan document to read.
    #[arg(long, default_value = "plan.md")]
    input: PathBuf,
    /// Number of sprint buckets in the chart.
    #[arg(long, default_value_t = DEFAULT_HORIZON_BUCKETS)]
    horizon: u32,
    /// Weeks covered by one sprint bucket.
    #[arg(long, default_value_t = DEFAULT_BUCKET_WIDTH_WEEKS)]
    bucket_width: u32,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Chart(args) => run_chart(args),
        Command::Extract(args) => run_extract(args),
        Command::Rows(args) => run_rows(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_chart(args: ChartArgs) -> Result<(), String> {
    let config = chart_config(args.bucket_width, args.horizon)?;
    let text = read_plan(&args.input)?;

    let run = extract_outline_with_report(&text);
    if run.records.is_empty() {
        eprintln!(
            "warning: no outline records extracted from '{}'; chart will be empty",
            args.input.display()
        );
    }
    for warning in &run.report.warnings {
        eprintln!("warning: {warning}");
    }

    let rows = chart_rows(&run.records, &config);
    let mut renderer = GridRenderer::new();
    if let Some(name) = args.sheet_name {
        renderer = renderer.sheet_name(name);
    }
    renderer
        .render_to_file(&rows, &config, &args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;

    println!(
        "Wrote {} row(s) across {} sprint column(s) to '{}'.",
        rows.len(),
        config.horizon_buckets,
        args.output.display()
    );
    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<(), String> {
    let text = read_plan(&args.input)?;
    let run = extract_outline_with_report(&text);

    let raw = if args.with_report {
        format_run(&run, args.format.into())?
    } else {
        format_records(&run.records, args.format.into())?
    };
    println!("{raw}");
    Ok(())
}

fn run_rows(args: RowsArgs) -> Result<(), String> {
    let config = chart_config(args.bucket_width, args.horizon)?;
    let text = read_plan(&args.input)?;

    let run = extract_outline_with_report(&text);
    let rows = chart_rows(&run.records, &config);

    let raw = format_rows(&rows, &config, args.format.into())?;
    println!("{raw}");
    Ok(())
}

fn chart_config(bucket_width: u32, horizon: u32) -> Result<ChartConfig, String> {
    let config = ChartConfig::new(bucket_width, horizon);
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn read_plan(path: &Path) -> Result<String, String> {
    fs::read_to_string(path)
        .map_err(|err| format!("Failed to read plan '{}': {err}", path.display()))
}
