use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The nine fractions reported by the benchmark, ascending.
pub const PERCENTILES: [f64; 9] = [0.50, 0.66, 0.75, 0.80, 0.90, 0.95, 0.98, 0.99, 1.00];

/// Error types for SearchBench operations
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchBenchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP {0}: {1}")]
    HttpError(u16, String),

    #[error("Search against index {0} returned no result")]
    EmptyResult(String),

    #[error("No samples to summarize")]
    NoSamples,

    #[error("Percentile {0} outside (0.0, 1.0]")]
    InvalidPercentile(f64),
}

/// JSON error envelope returned by the backend for error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Result type for SearchBench operations
pub type Result<T> = std::result::Result<T, SearchBenchError>;
