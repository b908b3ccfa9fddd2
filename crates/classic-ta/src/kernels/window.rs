//! Sliding-window statistics.
//!
//! These are the building blocks behind every indicator in the crate: SMA is
//! [`window_means`] with validation on top, EMA seeds from [`window_mean`], RSI
//! averages its gain and loss series with [`window_means`], and Bollinger Bands
//! pair each window mean with [`window_population_variance`].
//!
//! # Example
//!
//! ```
//! use classic_ta::kernels::window::{window_mean, window_means};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((window_mean(&data[..3]).unwrap() - 2.0).abs() < 1e-10);
//!
//! let means = window_means(&data, 3).unwrap();
//! assert_eq!(means.len(), 3);
//! ```

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Arithmetic mean of a single window.
///
/// An empty window has no mean; callers guarantee a non-empty slice, and an
/// empty one yields NaN from `0 / 0`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the window length is not representable in `T`.
#[inline]
pub fn window_mean<T: SeriesElement>(window: &[T]) -> Result<T> {
    let len = T::from_usize(window.len())?;
    let sum = window.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(sum / len)
}

/// Population variance of a window around a precomputed `mean`.
///
/// Divides by the window length, not `len - 1`.
///
/// # Errors
///
/// Returns `Error::NumericConversion` if the window length is not representable in `T`.
#[inline]
pub fn window_population_variance<T: SeriesElement>(window: &[T], mean: T) -> Result<T> {
    let len = T::from_usize(window.len())?;
    let sum_sq = window.iter().fold(T::zero(), |acc, &x| {
        let dev = x - mean;
        acc + dev * dev
    });
    Ok(sum_sq / len)
}

/// Mean of every complete window of `period` elements, in order.
///
/// The output has `data.len() - period + 1` values, or none when the data is
/// shorter than the period.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn window_means<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    let period_t = T::from_usize(period)?;

    Ok(data
        .windows(period)
        .map(|w| w.iter().fold(T::zero(), |acc, &x| acc + x) / period_t)
        .collect())
}
