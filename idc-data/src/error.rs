/// Error types for loading the chart's source data
use thiserror::Error;

/// Failure to obtain or read the tabular source.
///
/// Terminal for the chart: it is shown once as a placeholder and never retried.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Network, HTTP status or response body failure
    #[error("Failed to fetch data: {0}")]
    Fetch(String),

    /// Malformed CSV
    #[error("Failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),

    /// The header row does not contain the category column
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
