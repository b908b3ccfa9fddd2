//! Error types for classic-ta.
//!
//! Every indicator reports precondition violations through [`Error`] instead of
//! panicking or leaking non-numeric values into its output.

use thiserror::Error;

/// The main error type for classic-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is too short for the requested operation.
    ///
    /// Only indicators that cannot produce a meaningful first value from a
    /// short series (EMA, whose seed needs a full window) return this.
    #[error("insufficient data for {indicator}: required {required} elements, got {actual}")]
    InsufficientData {
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
        /// Name of the indicator that rejected the input.
        indicator: &'static str,
    },

    /// A caller-provided output buffer cannot hold the computed series.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferTooSmall {
        /// The number of output slots required.
        required: usize,
        /// The number of output slots provided.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The period parameter is invalid.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// An RSI window had neither gains nor losses (or both averages
    /// overflowed) and the caller asked for such windows to be rejected
    /// rather than reported as neutral.
    #[error("indeterminate RSI at output index {index}: window has no gains and no losses, or both overflow")]
    IndeterminateRsi {
        /// Position in the RSI output series of the flat window.
        index: usize,
    },
}

/// Convenience type alias for Results using the classic-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
