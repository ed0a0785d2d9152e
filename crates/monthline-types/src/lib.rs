//! Core types for the monthline OHLCV resampler.
//!
//! This crate provides the fundamental data structures used throughout monthline:
//!
//! - [`DailyRecord`] - A single trading day for one ticker
//! - [`MonthlyRecord`] - A month-end OHLCV row enriched with moving averages
//! - [`OUTPUT_COLUMNS`] - The fixed column order of every output file
//! - [`MonthlineError`] - Errors raised while loading, processing, or writing

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/monthline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod record;

pub use error::{MonthlineError, Result};
pub use record::{DailyRecord, INPUT_COLUMNS, MonthlyRecord, OUTPUT_COLUMNS};
