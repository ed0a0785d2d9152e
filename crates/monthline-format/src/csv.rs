//! CSV output format.

use ::csv::WriterBuilder;
use monthline_types::{MonthlyRecord, OUTPUT_COLUMNS};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes a header row followed by one comma-delimited row per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    /// Creates a new CSV formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for CsvFormatter {
    fn write_monthly<W: Write + Send>(
        &self,
        records: &[MonthlyRecord],
        writer: W,
    ) -> Result<(), FormatError> {
        let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
        out.write_record(OUTPUT_COLUMNS)?;

        for record in records {
            out.write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.ticker.clone(),
                record.open.to_string(),
                record.high.to_string(),
                record.low.to_string(),
                record.close.to_string(),
                record.volume.to_string(),
                record.sma_10.to_string(),
                record.sma_20.to_string(),
                record.ema_10.to_string(),
                record.ema_20.to_string(),
            ])?;
        }

        out.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_record() -> MonthlyRecord {
        MonthlyRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ticker: "AAPL".to_string(),
            open: 10.0,
            high: 13.0,
            low: 9.5,
            close: 11.0,
            volume: 600,
            sma_10: 11.0,
            sma_20: 11.0,
            ema_10: 11.0,
            ema_20: 11.25,
        }
    }

    fn render(formatter: &CsvFormatter, records: &[MonthlyRecord]) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_monthly(records, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_csv_monthly() {
        let result = render(&CsvFormatter::new(), &[create_test_record()]);
        let lines: Vec<_> = result.lines().collect();

        assert_eq!(
            lines[0],
            "date,ticker,open,high,low,close,volume,SMA_10,SMA_20,EMA_10,EMA_20"
        );
        assert_eq!(lines[1], "2024-01-31,AAPL,10,13,9.5,11,600,11,11,11,11.25");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_header_without_rows() {
        let result = render(&CsvFormatter::new(), &[]);
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_ticker_with_delimiter_is_quoted() {
        let mut record = create_test_record();
        record.ticker = "BRK,B".to_string();

        let result = render(&CsvFormatter::new(), &[record]);
        assert!(result.contains("\"BRK,B\""));
    }
}
