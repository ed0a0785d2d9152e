//! Load, split, resample, enrich, and write.

use std::collections::HashMap;

use monthline_aggregate::aggregate_monthly;
use monthline_indicators::enrich;
use monthline_load::load_data;
use monthline_types::{DailyRecord, MonthlyRecord, Result};
use tracing::{debug, trace};

use crate::{PipelineConfig, TickerReport, save_ticker_data};

/// One ticker's daily records.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerPartition {
    /// Ticker identifier.
    pub ticker: String,
    /// The ticker's rows in input order.
    pub records: Vec<DailyRecord>,
}

/// Receives progress events from [`process_all_tickers`].
pub trait Progress {
    /// Called once the input is loaded, with tickers in processing order.
    fn on_loaded(&mut self, _tickers: &[&str]) {}

    /// Called after each ticker's file is written.
    fn on_saved(&mut self, _report: &TickerReport) {}
}

/// A [`Progress`] that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Splits records by ticker, preserving first-seen ticker order.
#[must_use]
pub fn partition_by_ticker(records: Vec<DailyRecord>) -> Vec<TickerPartition> {
    let mut partitions: Vec<TickerPartition> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let slot = match index.get(&record.ticker) {
            Some(&slot) => slot,
            None => {
                index.insert(record.ticker.clone(), partitions.len());
                partitions.push(TickerPartition {
                    ticker: record.ticker.clone(),
                    records: Vec::new(),
                });
                partitions.len() - 1
            }
        };
        partitions[slot].records.push(record);
    }

    partitions
}

/// Resamples one ticker to monthly bars and adds its moving averages.
#[must_use]
pub fn process_single_ticker(ticker: &str, records: &[DailyRecord]) -> Vec<MonthlyRecord> {
    let bars = aggregate_monthly(records);
    debug!(ticker, days = records.len(), months = bars.len(), "aggregated monthly bars");
    for bar in &bars {
        trace!(ticker, month_end = %bar.month_end, days = bar.day_count, "monthly bar");
    }
    enrich(ticker, &bars)
}

/// Runs the whole pipeline described by `config`.
///
/// Tickers are processed in the order they first appear in the input. The
/// first failure aborts the run.
///
/// # Errors
///
/// Returns the loader's error if the input cannot be read, or an I/O
/// error if an output file cannot be written.
pub fn process_all_tickers<P: Progress + ?Sized>(
    config: &PipelineConfig,
    progress: &mut P,
) -> Result<Vec<TickerReport>> {
    let records = load_data(&config.input_path)?;
    let partitions = partition_by_ticker(records);

    let tickers: Vec<&str> = partitions.iter().map(|p| p.ticker.as_str()).collect();
    debug!(count = tickers.len(), "partitioned input by ticker");
    progress.on_loaded(&tickers);

    let mut reports = Vec::with_capacity(partitions.len());
    for partition in &partitions {
        let monthly = process_single_ticker(&partition.ticker, &partition.records);
        let report = save_ticker_data(&monthly, &partition.ticker, config)?;
        progress.on_saved(&report);
        reports.push(report);
    }

    Ok(reports)
}
