//! JSON output format.

use monthline_types::MonthlyRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
        }
    }
}

impl Formatter for JsonFormatter {
    fn write_monthly<W: Write + Send>(
        &self,
        records: &[MonthlyRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                serde_json::to_writer(&mut writer, records)?;
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_record(month: u32) -> MonthlyRecord {
        MonthlyRecord {
            date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            ticker: "MSFT".to_string(),
            open: 20.0,
            high: 22.0,
            low: 19.0,
            close: 21.5,
            volume: 1_000,
            sma_10: 21.5,
            sma_20: 21.5,
            ema_10: 21.5,
            ema_20: 21.5,
        }
    }

    fn render(formatter: &JsonFormatter, records: &[MonthlyRecord]) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_monthly(records, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_json_array() {
        let result = render(&JsonFormatter::new(), &[create_test_record(1)]);

        assert!(result.starts_with('['));
        assert!(result.contains("\"SMA_10\":21.5"));
        assert!(result.contains("\"ticker\":\"MSFT\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let result = render(&formatter, &[create_test_record(1), create_test_record(2)]);

        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }
}
