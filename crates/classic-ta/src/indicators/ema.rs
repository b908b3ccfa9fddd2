//! Exponential Moving Average (EMA) indicator.
//!
//! The Exponential Moving Average gives more weight to recent prices than the
//! Simple Moving Average and responds faster to price changes.
//!
//! # Algorithm
//!
//! 1. The first EMA value is the SMA of the first `period` elements
//! 2. Each later value moves the previous one toward the new price:
//!    `EMA = (Price - EMA_prev) × α + EMA_prev`
//!
//! # Smoothing Variants
//!
//! - **Standard EMA**: `α = 2 / (period + 1)`
//! - **Wilder's Smoothing**: `α = 1 / period`
//!
//! # Output Alignment
//!
//! The output is compact: the seed followed by one value per remaining input
//! element, so its length is `data.len() - period + 1`. Unlike SMA, a series
//! shorter than the period is an error: there is no window to seed from.
//!
//! # Example
//!
//! ```
//! use classic_ta::indicators::ema::{ema, ema_wilder};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let result = ema(&data, 3).unwrap();
//! assert_eq!(result.len(), 4);
//! assert!((result[0] - 2.0).abs() < 1e-10); // SMA seed
//! assert!((result[1] - 3.0).abs() < 1e-10); // (4 - 2) * 0.5 + 2
//!
//! let wilder = ema_wilder(&data, 3).unwrap();
//! assert_eq!(wilder.len(), 4);
//! ```

use crate::error::Result;
use crate::kernels::window::window_mean;
use crate::traits::{validate_indicator_input, validate_output_len, validate_period, SeriesElement};

/// Returns the input index that the first EMA value (the seed) aligns to.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(5), 4);
/// assert_eq!(ema_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length required for EMA.
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    period
}

/// Returns the EMA output length for an input of `len` elements.
///
/// Zero whenever [`ema`] would reject the input.
#[inline]
#[must_use]
pub const fn ema_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < period {
        0
    } else {
        len - period + 1
    }
}

/// Returns the standard EMA multiplier `2 / (period + 1)`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::NumericConversion` if `period + 1` is not representable in `T`
///
/// # Example
///
/// ```
/// use classic_ta::indicators::ema::ema_multiplier;
///
/// let alpha: f64 = ema_multiplier(3).unwrap();
/// assert!((alpha - 0.5).abs() < 1e-12);
/// ```
pub fn ema_multiplier<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period)?;
    let period_plus_one = T::from_usize(period.saturating_add(1))?;
    Ok(T::two() / period_plus_one)
}

/// Computes Wilder's smoothing factor: α = 1 / period
fn wilder_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period)?;
    Ok(T::one() / T::from_usize(period)?)
}

/// Computes the Exponential Moving Average (EMA) using standard smoothing.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods for the seed window and the multiplier
///
/// # Returns
///
/// A `Vec<T>` of length `data.len() - period + 1`: the SMA seed followed by
/// one smoothed value per remaining input element.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the input data is empty
/// - `Error::InsufficientData` if the input data is shorter than the period
///
/// # Example
///
/// ```
/// use classic_ta::indicators::ema::ema;
///
/// let data = vec![1.0_f64; 5];
/// let result = ema(&data, 2).unwrap();
/// assert_eq!(result, vec![1.0; 4]);
///
/// assert!(ema(&data, 6).is_err());
/// ```
#[inline]
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = ema_multiplier::<T>(period)?;
    ema_with_alpha(data, period, alpha)
}

/// Computes the EMA into a pre-allocated output buffer.
///
/// # Returns
///
/// The number of values written to the front of `output`.
///
/// # Errors
///
/// The errors of [`ema`], plus `Error::BufferTooSmall` if `output` is shorter
/// than `data.len() - period + 1`.
#[must_use = "this returns a Result with the written count, which should be used"]
pub fn ema_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    let alpha = ema_multiplier::<T>(period)?;
    ema_with_alpha_into(data, period, alpha, output)
}

/// Computes the EMA using Wilder's smoothing factor `α = 1 / period`.
///
/// # Errors
///
/// Same as [`ema`].
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema_wilder<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = wilder_alpha::<T>(period)?;
    ema_with_alpha(data, period, alpha)
}

/// Computes an EMA seeded by the first `period` values, with a caller-chosen
/// smoothing factor.
///
/// The factor is applied as given; values outside `(0, 1]` are accepted.
///
/// # Errors
///
/// Same as [`ema`].
///
/// # Example
///
/// ```
/// use classic_ta::indicators::ema::ema_with_alpha;
///
/// // alpha = 1 tracks the input after the seed
/// let result = ema_with_alpha(&[1.0_f64, 2.0, 3.0, 8.0], 2, 1.0).unwrap();
/// assert!((result[0] - 1.5).abs() < 1e-10);
/// assert!((result[1] - 3.0).abs() < 1e-10);
/// assert!((result[2] - 8.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema_with_alpha<T: SeriesElement>(data: &[T], period: usize, alpha: T) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "ema")?;

    let mut output = vec![T::zero(); ema_output_len(data.len(), period)];
    compute_ema_core(data, period, alpha, &mut output)?;
    Ok(output)
}

/// Buffer-filling form of [`ema_with_alpha`].
///
/// # Errors
///
/// The errors of [`ema`], plus `Error::BufferTooSmall`.
#[must_use = "this returns a Result with the written count, which should be used"]
pub fn ema_with_alpha_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    alpha: T,
    output: &mut [T],
) -> Result<usize> {
    validate_indicator_input(data, period, "ema")?;
    let count = ema_output_len(data.len(), period);
    validate_output_len(output, count)?;

    compute_ema_core(data, period, alpha, &mut output[..count])?;
    Ok(count)
}

/// Core EMA recurrence.
///
/// Assumes validated input and an `output` of exactly
/// `data.len() - period + 1` slots.
fn compute_ema_core<T: SeriesElement>(
    data: &[T],
    period: usize,
    alpha: T,
    output: &mut [T],
) -> Result<()> {
    let mut prev = window_mean(&data[..period])?;
    output[0] = prev;

    for (slot, &price) in output[1..].iter_mut().zip(&data[period..]) {
        prev = (price - prev) * alpha + prev;
        *slot = prev;
    }

    Ok(())
}

/// Computes the equivalent standard EMA period for a given Wilder period.
///
/// Wilder's smoothing with period N is equivalent to standard EMA with period 2N - 1.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::ema::wilder_to_standard_period;
///
/// assert_eq!(wilder_to_standard_period(14), 27);
/// ```
#[must_use = "this returns the equivalent standard EMA period"]
pub const fn wilder_to_standard_period(wilder_period: usize) -> usize {
    (2 * wilder_period).saturating_sub(1)
}
