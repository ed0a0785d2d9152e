//! Run command implementation.
//!
//! Loads the input table, writes one monthly file per ticker, and reports
//! progress on the terminal.

use crate::display::{Format, TerminalProgress};
use anyhow::{Context, Result};
use monthline_lib::prelude::*;
use std::path::PathBuf;

/// Process every ticker in `input` into `output_dir`.
pub(crate) fn run(input: PathBuf, output_dir: PathBuf, format: Format, quiet: bool) -> Result<()> {
    let config = PipelineConfig::new(input, output_dir).with_format(format.into());

    if !quiet {
        println!("Loading data...");
    }

    let mut progress = TerminalProgress::new(quiet);
    let reports = process_all_tickers(&config, &mut progress).with_context(|| {
        format!(
            "Failed to process {} into {}",
            config.input_path.display(),
            config.output_dir.display()
        )
    })?;
    progress.finish();

    tracing::info!(tickers = reports.len(), "run complete");

    if !quiet {
        println!(
            "\nProcessing complete! All files saved to '{}/' directory",
            config.output_dir.display()
        );
    }

    Ok(())
}
