//! Streaming daily-to-monthly aggregation.

use chrono::{Datelike, NaiveDate};
use monthline_types::DailyRecord;

use crate::MonthlyBar;

/// Aggregates one ticker's daily records into month-end bars.
///
/// Records are stably sorted by date first, so rows sharing a date keep
/// their input order for the first/last rules. Months without records are
/// absent from the output.
#[must_use]
pub fn aggregate_monthly(records: &[DailyRecord]) -> Vec<MonthlyBar> {
    let mut sorted: Vec<&DailyRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut aggregator = MonthlyAggregator::new();
    let mut bars = Vec::new();

    for record in sorted {
        if let Some(bar) = aggregator.process(record) {
            bars.push(bar);
        }
    }

    if let Some(bar) = aggregator.finish() {
        bars.push(bar);
    }

    bars
}

/// Returns the last calendar day of the month containing `date`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Streaming daily record aggregator.
///
/// Expects records in chronological order and folds each calendar month
/// into one [`MonthlyBar`].
#[derive(Debug, Default)]
pub struct MonthlyAggregator {
    current_bar: Option<MonthlyBarBuilder>,
}

impl MonthlyAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self { current_bar: None }
    }

    /// Processes a record, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when this record starts a new month,
    /// `None` otherwise.
    pub fn process(&mut self, record: &DailyRecord) -> Option<MonthlyBar> {
        let anchor = month_end(record.date);

        match self.current_bar.take() {
            Some(mut builder) if builder.month_end == anchor => {
                builder.update(record);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = builder.finish();
                self.current_bar = Some(MonthlyBarBuilder::new(anchor, record));
                Some(completed)
            }
            None => {
                self.current_bar = Some(MonthlyBarBuilder::new(anchor, record));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial bar.
    #[must_use]
    pub fn finish(self) -> Option<MonthlyBar> {
        self.current_bar.map(MonthlyBarBuilder::finish)
    }
}

/// Builder for monthly bars.
#[derive(Debug)]
struct MonthlyBarBuilder {
    month_end: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    day_count: u32,
}

impl MonthlyBarBuilder {
    /// Creates a new builder from the month's first record.
    const fn new(month_end: NaiveDate, record: &DailyRecord) -> Self {
        Self {
            month_end,
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
            day_count: 1,
        }
    }

    /// Folds a later record of the same month into the builder.
    fn update(&mut self, record: &DailyRecord) {
        self.high = self.high.max(record.high);
        self.low = self.low.min(record.low);
        self.close = record.close;
        self.volume = self.volume.saturating_add(record.volume);
        self.day_count += 1;
    }

    /// Finishes building and returns the bar.
    const fn finish(self) -> MonthlyBar {
        MonthlyBar::new(
            self.month_end,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.day_count,
        )
    }
}
