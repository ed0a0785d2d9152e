//! Month-end OHLCV bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBar {
    /// Last calendar day of the month.
    pub month_end: NaiveDate,
    /// Opening price (first trading day's open).
    pub open: f64,
    /// Highest price during the month.
    pub high: f64,
    /// Lowest price during the month.
    pub low: f64,
    /// Closing price (last trading day's close).
    pub close: f64,
    /// Total volume.
    pub volume: u64,
    /// Number of daily records in the bar.
    pub day_count: u32,
}

impl MonthlyBar {
    /// Creates a new monthly bar.
    #[must_use]
    pub const fn new(
        month_end: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        day_count: u32,
    ) -> Self {
        Self {
            month_end,
            open,
            high,
            low,
            close,
            volume,
            day_count,
        }
    }
}
