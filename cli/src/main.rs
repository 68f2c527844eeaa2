use std::fs;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use issue_report_scraper::{
    DEFAULT_INPUT_FILE, OutputFormat, ScrapeConfig, format_rows, scrape_file,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "extract-issues")]
#[command(about = "Print the issue table found in an accessibility snapshot dump")]
#[command(version)]
struct Cli {
    /// Snapshot dump to read.
    #[arg(long, short, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,
    /// YAML file with scraper settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Literal that marks the rowgroup holding the issue rows.
    #[arg(long)]
    marker: Option<String>,
    /// Indentation of cells that belong directly to a row.
    #[arg(long)]
    cell_depth: Option<usize>,
    /// Lines searched below a cell for its link or text label.
    #[arg(long)]
    lookahead: Option<usize>,
    /// Rows with fewer cells are left out.
    #[arg(long)]
    min_cells: Option<usize>,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
    /// Write the rendered report to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Write a run summary (JSON, or YAML for .yaml/.yml paths).
    #[arg(long)]
    report_out: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    debug!(?config, input = %cli.input.display(), "Resolved configuration");

    let outcome = scrape_file(&cli.input, &config).map_err(|err| err.to_string())?;
    let rendered = format_rows(&outcome.rows, cli.format).map_err(|err| err.to_string())?;

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|err| format!("Failed to write report: {err}"))?;
        }
    }

    if let Some(path) = &cli.report_out {
        outcome
            .report
            .write(path)
            .map_err(|err| format!("Failed to write report summary '{}': {err}", path.display()))?;
    }

    Ok(())
}

/// Defaults, then the config file, then individual flags.
fn resolve_config(cli: &Cli) -> Result<ScrapeConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ScrapeConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ScrapeConfig::default(),
    };

    if let Some(marker) = &cli.marker {
        config.rowgroup_marker = marker.clone();
    }
    if let Some(depth) = cli.cell_depth {
        config.cell_depth = depth;
    }
    if let Some(lookahead) = cli.lookahead {
        config.lookahead_lines = lookahead;
    }
    if let Some(min_cells) = cli.min_cells {
        config.min_cells = min_cells;
    }

    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}
