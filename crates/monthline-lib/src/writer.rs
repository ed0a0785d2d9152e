//! Per-ticker output files.

use monthline_types::{MonthlyRecord, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use crate::PipelineConfig;

/// Outcome of writing one ticker's output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerReport {
    /// Ticker identifier.
    pub ticker: String,
    /// File that was written.
    pub path: PathBuf,
    /// Number of monthly rows written.
    pub rows: usize,
}

impl std::fmt::Display for TickerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Saved {} data to {} ({} rows)",
            self.ticker,
            self.path.display(),
            self.rows
        )
    }
}

/// Writes a ticker's monthly records to `<output_dir>/result_<ticker>.<ext>`.
///
/// The output directory is created if missing and any existing file for
/// the ticker is replaced.
///
/// # Errors
///
/// Returns [`MonthlineError::Io`](monthline_types::MonthlineError::Io) if the
/// directory or file cannot be written.
pub fn save_ticker_data(
    records: &[MonthlyRecord],
    ticker: &str,
    config: &PipelineConfig,
) -> Result<TickerReport> {
    fs::create_dir_all(config.output_dir())?;

    let path = config.output_path_for(ticker);
    let writer = BufWriter::new(File::create(&path)?);
    config.format.write_monthly(records, writer)?;

    let report = TickerReport {
        ticker: ticker.to_string(),
        path,
        rows: records.len(),
    };
    info!(ticker = %report.ticker, path = %report.path.display(), rows = report.rows, "saved ticker");
    Ok(report)
}
