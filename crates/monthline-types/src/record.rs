//! Daily input and monthly output records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Columns every input table must provide, matched by header name.
pub const INPUT_COLUMNS: [&str; 7] = ["date", "ticker", "open", "high", "low", "close", "volume"];

/// Column order of every output table.
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "date", "ticker", "open", "high", "low", "close", "volume", "SMA_10", "SMA_20", "EMA_10",
    "EMA_20",
];

/// A single trading day for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Trading date.
    pub date: NaiveDate,
    /// Ticker identifier.
    pub ticker: String,
    /// Opening price.
    pub open: f64,
    /// Highest price of the day.
    pub high: f64,
    /// Lowest price of the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

impl DailyRecord {
    /// Creates a new daily record.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        ticker: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            ticker: ticker.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// A month-end OHLCV row enriched with moving averages of the monthly close.
///
/// Field names serialize to the [`OUTPUT_COLUMNS`] header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Last calendar day of the month.
    pub date: NaiveDate,
    /// Ticker identifier.
    pub ticker: String,
    /// Open of the first trading day in the month.
    pub open: f64,
    /// Highest high in the month.
    pub high: f64,
    /// Lowest low in the month.
    pub low: f64,
    /// Close of the last trading day in the month.
    pub close: f64,
    /// Total volume in the month.
    pub volume: u64,
    /// 10-month simple moving average of the close.
    #[serde(rename = "SMA_10")]
    pub sma_10: f64,
    /// 20-month simple moving average of the close.
    #[serde(rename = "SMA_20")]
    pub sma_20: f64,
    /// 10-month exponential moving average of the close.
    #[serde(rename = "EMA_10")]
    pub ema_10: f64,
    /// 20-month exponential moving average of the close.
    #[serde(rename = "EMA_20")]
    pub ema_20: f64,
}

impl MonthlyRecord {
    /// Returns true if `low <= open, close <= high`.
    #[must_use]
    pub fn is_range_consistent(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }
}
