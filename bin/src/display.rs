//! Display utilities and progress reporting for the monthline CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use monthline_lib::prelude::*;

/// Output format for monthly files.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Prints run progress to the terminal.
///
/// Per-ticker lines are printed with the bar suspended so they are not
/// overwritten by it.
pub(crate) struct TerminalProgress {
    quiet: bool,
    bar: ProgressBar,
}

impl TerminalProgress {
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            quiet,
            bar: ProgressBar::hidden(),
        }
    }

    /// Clears the progress bar once every ticker is written.
    pub(crate) fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for TerminalProgress {
    fn on_loaded(&mut self, tickers: &[&str]) {
        if self.quiet {
            return;
        }

        println!("Found {} tickers: {}", tickers.len(), tickers.join(", "));
        println!("\nProcessing each ticker...");

        let bar = ProgressBar::new(tickers.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tickers {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.bar = bar;
    }

    fn on_saved(&mut self, report: &TickerReport) {
        if !self.quiet {
            self.bar.suspend(|| println!("{report}"));
        }
        self.bar.set_message(report.ticker.clone());
        self.bar.inc(1);
    }
}
