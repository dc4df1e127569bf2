//! Error types for interval construction and merging.

use thiserror::Error;

/// Errors produced while building or merging intervals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// An interval whose start lies after its end.
    #[error("invalid interval [{start}, {end}]: start is greater than end")]
    InvalidInterval { start: i64, end: i64 },

    /// An inverted pair found at `index` while validating a batch.
    #[error("invalid interval at index {index}: [{start}, {end}] has start greater than end")]
    InvalidEntry { index: usize, start: i64, end: i64 },

    /// An interval literal that could not be parsed.
    #[error("malformed interval literal: {0}")]
    Parse(String),
}

/// Convenience alias for interval results.
pub type IntervalResult<T> = Result<T, IntervalError>;
