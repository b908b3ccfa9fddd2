//! Floating-point comparison helpers.
//!
//! Indicator outputs are sums and quotients of prices, so comparing them for
//! exact equality is usually wrong. These tolerance-based helpers are what the
//! crate's own tests use, and are exported for callers checking results.
//!
//! # Example
//!
//! ```
//! use classic_ta::utils::{approx_eq, series_approx_eq, EPSILON};
//!
//! assert!(approx_eq(1.0 / 3.0, 0.333333333333333, EPSILON));
//! assert!(series_approx_eq(&[0.1 + 0.2, 1.0], &[0.3, 1.0], EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Absolute tolerance for values produced by a handful of operations.
pub const EPSILON: f64 = 1e-10;

/// Absolute tolerance for values with long accumulation chains, such as late
/// EMA values or RSI ratios.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by less than `tolerance`.
///
/// Two NaNs compare equal; NaN against a number does not.
///
/// # Example
///
/// ```
/// use classic_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Returns `true` if `a` and `b` differ by less than `rel_tolerance` relative
/// to the larger magnitude.
///
/// Suited to prices of very different scales. Two zeros compare equal.
///
/// # Example
///
/// ```
/// use classic_ta::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(!approx_eq_relative(1.0, 1.1, 1e-9));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => return true,
        (false, false) => {}
        _ => return false,
    }

    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        return true;
    }
    (a - b).abs() / scale < rel_tolerance
}

/// Element-wise [`approx_eq`] over two series of equal length.
///
/// Series of different lengths never compare equal.
#[must_use]
pub fn series_approx_eq<T: SeriesElement>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tolerance))
}
