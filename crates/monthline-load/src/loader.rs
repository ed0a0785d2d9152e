//! CSV table loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use monthline_types::{DailyRecord, INPUT_COLUMNS, MonthlineError, Result};
use tracing::debug;

use crate::parse::{ParseError, parse_date, parse_price, parse_volume};

/// Loads daily records from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`MonthlineError::NotFound`] if the file cannot be opened,
/// [`MonthlineError::MissingColumn`] if a required column is absent, and
/// [`MonthlineError::Parse`] if a row cannot be parsed.
pub fn load_data(path: impl AsRef<Path>) -> Result<Vec<DailyRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| MonthlineError::NotFound {
        path: path.to_path_buf(),
    })?;

    let records = read_records(BufReader::new(file))?;
    debug!(path = %path.display(), rows = records.len(), "loaded daily records");
    Ok(records)
}

/// Reads daily records from CSV text.
///
/// Columns are matched by header name. Extra columns are ignored and
/// surrounding whitespace is trimmed from every field.
///
/// # Errors
///
/// Returns [`MonthlineError::MissingColumn`] or [`MonthlineError::Parse`]
/// for malformed input.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DailyRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?;
    let columns = ColumnIndex::from_headers(headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map_or(0, csv::Position::line);
        let record = columns
            .parse_row(&row)
            .map_err(|err| MonthlineError::parse(line, err.to_string()))?;
        records.push(record);
    }

    Ok(records)
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    ticker: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl ColumnIndex {
    /// Locates every required column by name.
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| MonthlineError::MissingColumn(name.to_string()))
        };

        let [date, ticker, open, high, low, close, volume] = INPUT_COLUMNS;
        Ok(Self {
            date: find(date)?,
            ticker: find(ticker)?,
            open: find(open)?,
            high: find(high)?,
            low: find(low)?,
            close: find(close)?,
            volume: find(volume)?,
        })
    }

    /// Parses one data row.
    fn parse_row(&self, row: &StringRecord) -> std::result::Result<DailyRecord, ParseError> {
        let field = |index: usize| row.get(index).unwrap_or_default();

        Ok(DailyRecord {
            date: parse_date(field(self.date))?,
            ticker: field(self.ticker).to_string(),
            open: parse_price("open", field(self.open))?,
            high: parse_price("high", field(self.high))?,
            low: parse_price("low", field(self.low))?,
            close: parse_price("close", field(self.close))?,
            volume: parse_volume(field(self.volume))?,
        })
    }
}

/// Maps a csv reader error onto the parse error class.
fn csv_error(err: csv::Error) -> MonthlineError {
    let line = err.position().map_or(0, csv::Position::line);
    match err.into_kind() {
        csv::ErrorKind::Io(io) => MonthlineError::Io(io),
        kind => MonthlineError::parse(line, format!("{kind:?}")),
    }
}
