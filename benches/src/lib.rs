//! Benchmark utilities for monthline.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use monthline_lib::DailyRecord;

/// Shape of a synthetic input table.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of distinct tickers.
    pub tickers: usize,
    /// Calendar days covered per ticker (weekends are skipped).
    pub days: u32,
    /// First calendar day.
    pub start: NaiveDate,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            tickers: 5,
            days: 365 * 10,
            start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }
}

impl BenchmarkConfig {
    /// Generates weekday records for every ticker with a deterministic
    /// random-walk close.
    pub fn daily_records(&self) -> Vec<DailyRecord> {
        let mut records = Vec::new();

        for t in 0..self.tickers {
            let ticker = format!("T{t:03}");
            let mut close = 100.0 + t as f64;

            for offset in 0..self.days {
                let date = self.start + TimeDelta::days(i64::from(offset));
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    continue;
                }

                let step = f64::from((offset * 7 + t as u32 * 13) % 11) - 5.0;
                let open = close;
                close = (close + step * 0.1).max(1.0);
                let high = open.max(close) + 0.5;
                let low = (open.min(close) - 0.5).max(0.5);
                let volume = 1_000 + u64::from(offset);
                records.push(DailyRecord::new(
                    date,
                    ticker.clone(),
                    open,
                    high,
                    low,
                    close,
                    volume,
                ));
            }
        }

        records
    }

    /// Renders [`Self::daily_records`] as CSV text.
    pub fn csv(&self) -> String {
        let mut out = String::from("date,ticker,open,high,low,close,volume\n");
        for r in self.daily_records() {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                r.date, r.ticker, r.open, r.high, r.low, r.close, r.volume
            ));
        }
        out
    }
}
