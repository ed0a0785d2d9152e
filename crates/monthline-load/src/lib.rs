//! CSV loading of daily price records for monthline.
//!
//! This crate provides the input side of the pipeline:
//!
//! - [`load_data`] - Reads a CSV file into [`DailyRecord`](monthline_types::DailyRecord)s
//! - [`read_records`] - Same, from any reader
//! - [`parse::parse_date`] - Lenient calendar date parsing
//! - [`ParseError`] - Field-level parse failures

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/monthline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod loader;
pub mod parse;

pub use loader::{load_data, read_records};
pub use parse::{ParseError, parse_date};
