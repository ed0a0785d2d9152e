//! Run configuration.

use monthline_format::OutputFormat;
use std::path::{Path, PathBuf};

/// Input file read when none is given.
pub const DEFAULT_INPUT_PATH: &str = "output_file.csv";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Prefix of every per-ticker output file name.
pub const OUTPUT_FILE_PREFIX: &str = "result_";

/// Where a run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source CSV of daily records.
    pub input_path: PathBuf,
    /// Directory receiving one file per ticker.
    pub output_dir: PathBuf,
    /// Output file format.
    pub format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR)
    }
}

impl PipelineConfig {
    /// Creates a CSV-output configuration.
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            format: OutputFormat::Csv,
        }
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the output file path for `ticker`, e.g. `output/result_AAPL.csv`.
    ///
    /// Path separators and `%` in the ticker are percent-encoded, so the
    /// file always lands directly inside the output directory and distinct
    /// tickers never share a file.
    #[must_use]
    pub fn output_path_for(&self, ticker: &str) -> PathBuf {
        let mut stem = String::with_capacity(ticker.len());
        for c in ticker.chars() {
            match c {
                '%' => stem.push_str("%25"),
                '/' => stem.push_str("%2F"),
                '\\' => stem.push_str("%5C"),
                c => stem.push(c),
            }
        }
        self.output_dir.join(format!(
            "{OUTPUT_FILE_PREFIX}{stem}.{}",
            self.format.extension()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("output_file.csv"));
        assert_eq!(config.output_dir(), Path::new("output"));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_output_path_for() {
        let config = PipelineConfig::new("in.csv", "out");
        assert_eq!(config.output_path_for("AAPL"), Path::new("out/result_AAPL.csv"));

        let json = config.with_format(OutputFormat::Json);
        assert_eq!(json.output_path_for("AAPL"), Path::new("out/result_AAPL.json"));
    }

    #[test]
    fn test_output_path_encodes_separators() {
        let config = PipelineConfig::new("in.csv", "out");
        assert_eq!(
            config.output_path_for("BRK/B"),
            Path::new("out/result_BRK%2FB.csv")
        );
        assert_eq!(
            config.output_path_for("A\\B%"),
            Path::new("out/result_A%5CB%25.csv")
        );
    }

    #[test]
    fn test_output_paths_are_distinct_per_ticker() {
        let config = PipelineConfig::new("in.csv", "out");
        let tickers = ["BRK/B", "BRK_B", "BRK%2FB", "BRK\\B", "BRK.B"];

        let mut paths: Vec<_> = tickers.iter().map(|t| config.output_path_for(t)).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), tickers.len());
    }
}
