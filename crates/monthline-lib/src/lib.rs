//! Daily-to-monthly OHLCV resampling with moving-average enrichment.
//!
//! This is the facade crate of the monthline workspace. It re-exports the
//! component crates and adds the driver that ties them together:
//!
//! - [`PipelineConfig`] - Input path, output directory, and format
//! - [`partition_by_ticker`] - Splits loaded records per ticker
//! - [`process_single_ticker`] - Monthly bars plus SMA/EMA for one ticker
//! - [`save_ticker_data`] - Writes one ticker's output file
//! - [`process_all_tickers`] - Runs the whole pipeline

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/monthline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod pipeline;
mod writer;

// Re-export core types
pub use monthline_types::*;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR, OUTPUT_FILE_PREFIX, PipelineConfig};
pub use pipeline::{
    NoProgress, Progress, TickerPartition, partition_by_ticker, process_all_tickers,
    process_single_ticker,
};
pub use writer::{TickerReport, save_ticker_data};

// Re-export component crates
pub use monthline_aggregate::{MonthlyAggregator, MonthlyBar, aggregate_monthly, month_end};
pub use monthline_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};
pub use monthline_indicators::{MovingAverage, ema, enrich, sma};
pub use monthline_load::{ParseError, load_data, parse_date, read_records};

/// Prelude module for convenient imports.
///
/// ```
/// use monthline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use monthline_types::{DailyRecord, MonthlineError, MonthlyRecord, Result};

    pub use crate::{
        NoProgress, PipelineConfig, Progress, TickerReport, partition_by_ticker,
        process_all_tickers, process_single_ticker, save_ticker_data,
    };

    pub use monthline_format::OutputFormat;
    pub use monthline_load::load_data;
}
