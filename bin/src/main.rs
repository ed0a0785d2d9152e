//! monthline CLI - Daily stock prices to monthly OHLCV with moving averages.

use anyhow::Result;
use clap::Parser;
use monthline_lib::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "monthline")]
#[command(
    about = "Resample daily stock prices into per-ticker monthly OHLCV files with SMA/EMA indicators",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Input CSV with date, ticker, open, high, low, close, volume columns
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output directory. Files named result_<ticker>.<format>
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    commands::run::run(cli.input, cli.output_dir, cli.format, cli.quiet)
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
