//! Monthly OHLCV aggregation for monthline.
//!
//! This crate provides daily-to-monthly (candlestick) aggregation:
//!
//! - [`MonthlyBar`] - Month-end OHLCV bar data structure
//! - [`MonthlyAggregator`] - Streaming daily record aggregator
//! - [`aggregate_monthly`] - Sorts and aggregates a ticker's records
//! - [`month_end`] - Month-end anchor of a date

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/monthline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod bar;

pub use aggregator::{MonthlyAggregator, aggregate_monthly, month_end};
pub use bar::MonthlyBar;
