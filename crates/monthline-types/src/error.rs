//! Error types for monthline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for monthline operations.
pub type Result<T> = std::result::Result<T, MonthlineError>;

/// Errors that can occur while loading, aggregating, or writing data.
#[derive(Error, Debug)]
pub enum MonthlineError {
    /// Input source does not exist or cannot be opened.
    #[error("Input not found: {}", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// A required input column is absent from the header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source, header included.
        line: u64,
        /// What went wrong.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),
}

impl MonthlineError {
    /// Creates a parse error for the given source line.
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns true for errors caused by malformed input content.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::MissingColumn(_) | Self::Parse { .. })
    }
}
