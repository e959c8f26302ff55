/// Error types for the forecast library
use thiserror::Error;

/// Main error type for forecast operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} answered with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Nothing usable in a response body
    #[error("Couldn't parse any useful data: {0}")]
    NoUsableData(String),

    /// Too few points to fit a line
    #[error("Insufficient data points (needed: 2, found: {found})")]
    InsufficientPoints { found: usize },

    /// x and y series differ in length
    #[error("Series lengths differ (x: {xs}, y: {ys})")]
    MismatchedSeries { xs: usize, ys: usize },

    /// Every x value is the same, or the line is flat
    #[error("Degenerate fit: {0}")]
    Degenerate(&'static str),

    /// Storage is not declining
    #[error("Rate must be negative, got {0}")]
    RateNotNegative(f64),

    /// Extrapolated date cannot be represented
    #[error("Extrapolated date out of range: {0}")]
    DateOutOfRange(f64),
}

/// Type alias for Results using ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
