//! Moving-average indicators over monthly closes for monthline.
//!
//! - [`sma`] / [`ema`] - Series-valued moving averages
//! - [`MovingAverage`] - Named indicator with its output column
//! - [`enrich`] - Turns a ticker's [`MonthlyBar`](monthline_aggregate::MonthlyBar)s
//!   into output records

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/monthline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod enrich;
mod moving_average;

pub use enrich::enrich;
pub use moving_average::{MovingAverage, ema, sma};
