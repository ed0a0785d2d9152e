//! Field parsing for daily records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Date-only layouts, tried in order. Year-first layouts come first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// Date-time layouts, tried in order. The time of day is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Errors from parsing a single field of a daily record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No supported date layout matched.
    #[error("invalid date '{0}'")]
    InvalidDate(String),

    /// A price column did not hold a number.
    #[error("invalid {column} '{value}'")]
    InvalidPrice {
        /// Column name.
        column: &'static str,
        /// Offending field text.
        value: String,
    },

    /// The volume was not a non-negative whole number.
    #[error("invalid volume '{0}'")]
    InvalidVolume(String),
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`, `YYYYMMDD`,
/// `MM/DD/YYYY`, `DD-Mon-YYYY`, `DD Mon YYYY`, `Mon DD, YYYY`, ISO
/// date-times with a space or `T` separator, and RFC 3339 timestamps.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] if no layout matches.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let value = value.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Ok(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(datetime.date());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}

/// Parses a price field.
pub(crate) fn parse_price(column: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidPrice {
            column,
            value: value.to_string(),
        })
}

/// Parses a volume field.
///
/// Integral floats such as `1500.0` are accepted since spreadsheet exports
/// often write volumes that way.
pub(crate) fn parse_volume(value: &str) -> Result<u64, ParseError> {
    let value = value.trim();
    if let Ok(volume) = value.parse::<u64>() {
        return Ok(volume);
    }

    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => {
            Ok(v as u64)
        }
        _ => Err(ParseError::InvalidVolume(value.to_string())),
    }
}
