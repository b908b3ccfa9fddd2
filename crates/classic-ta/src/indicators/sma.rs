//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average smooths price data by averaging the last `period`
//! observations at every step.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i] + P[i+1] + ... + P[i+period-1]) / period
//! ```
//!
//! # Output Alignment
//!
//! The output is compact: one value per complete window, so its length is
//! `data.len() - period + 1`. `SMA[0]` corresponds to input index `period - 1`
//! (see [`sma_lookback`]). A series shorter than the period has no complete
//! window and yields an empty output rather than an error.
//!
//! # Example
//!
//! ```
//! use classic_ta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
//! assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
//! assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
//! ```

use crate::error::Result;
use crate::kernels::window::window_means;
use crate::traits::{validate_output_len, validate_period, SeriesElement};

/// Returns the input index that the first SMA value aligns to.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length that produces at least one SMA value.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    period
}

/// Returns the SMA output length for an input of `len` elements.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::sma::sma_output_len;
///
/// assert_eq!(sma_output_len(10, 3), 8);
/// assert_eq!(sma_output_len(2, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < period {
        0
    } else {
        len - period + 1
    }
}

/// Computes the Simple Moving Average (SMA) of a data series.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of observations to average over
///
/// # Returns
///
/// A `Vec<T>` with `data.len() - period + 1` values. Empty when `data` is
/// shorter than `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::sma::sma;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
/// let result = sma(&data, 3).unwrap();
/// assert!((result[0] - 11.0).abs() < 1e-10);
///
/// // Too little data: no complete window, no error.
/// assert!(sma(&data, 6).unwrap().is_empty());
/// ```
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    window_means(data, period)
}

/// Computes the Simple Moving Average into a pre-allocated output buffer.
///
/// Writes `sma_output_len(data.len(), period)` values to the front of `output`
/// and leaves the rest untouched.
///
/// # Returns
///
/// The number of values written.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::BufferTooSmall` if `output` cannot hold every value
///
/// # Example
///
/// ```
/// use classic_ta::indicators::sma::sma_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0; 5];
/// let written = sma_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(written, 3);
/// assert!((output[0] - 2.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the written count, which should be used"]
pub fn sma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_period(period)?;
    let count = sma_output_len(data.len(), period);
    validate_output_len(output, count)?;

    let period_t = T::from_usize(period)?;
    for (slot, window) in output.iter_mut().zip(data.windows(period)) {
        *slot = window.iter().fold(T::zero(), |acc, &x| acc + x) / period_t;
    }

    Ok(count)
}
