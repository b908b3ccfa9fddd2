//! Core traits for classic-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts the indicators over
//! `f32` and `f64`. The module also provides the validation helpers every
//! indicator runs at its call boundary.
//!
//! # Example
//!
//! ```
//! use classic_ta::traits::{SeriesElement, validate_indicator_input};
//!
//! fn first_window_mean<T: SeriesElement>(data: &[T], period: usize) -> classic_ta::Result<T> {
//!     validate_indicator_input(data, period, "first_window_mean")?;
//!
//!     let period_t = T::from_usize(period)?;
//!     let sum: T = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = first_window_mean(&data, 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};
use tracing::debug;

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price series.
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy` and `Default`
/// - `Send + Sync + 'static` so series can be shared across threads
///
/// # Example
///
/// ```
/// use classic_ta::traits::SeriesElement;
///
/// fn mean<T: SeriesElement>(data: &[T]) -> classic_ta::Result<T> {
///     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
///     Ok(sum / T::from_usize(data.len())?)
/// }
///
/// assert!((mean(&[1.0_f64, 2.0, 6.0]).unwrap() - 3.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used by the EMA multiplier: `2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// RSI is scaled onto `[0, 100]`.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        let two = Self::two();
        let ten = two * two * two + two;
        ten * ten
    }

    /// Returns the constant 50 as this type, the neutral RSI reading.
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        Self::hundred() / Self::two()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input data before indicator computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            debug!(
                indicator,
                required = min_length,
                actual = self.len(),
                "rejecting input: series shorter than window"
            );
            Err(Error::InsufficientData {
                required: min_length,
                actual: self.len(),
                indicator,
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            debug!("rejecting input: empty series");
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        debug!(period, "rejecting input: zero period");
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a caller-provided output buffer can hold `required` values.
///
/// # Errors
///
/// Returns `Error::BufferTooSmall` if `output` is shorter than `required`.
#[inline]
pub fn validate_output_len<T>(output: &[T], required: usize) -> Result<()> {
    if output.len() < required {
        debug!(
            required,
            actual = output.len(),
            "rejecting output buffer: too small"
        );
        Err(Error::BufferTooSmall {
            required,
            actual: output.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates input for indicators that need at least one full window.
///
/// Checks, in order:
/// 1. The period is non-zero
/// 2. The data is not empty
/// 3. The data has at least `period` elements
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if data length is less than the period
#[inline]
pub fn validate_indicator_input<T: SeriesElement>(
    data: &[T],
    period: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_period(period)?;
    data.validate_not_empty()?;
    data.validate_min_length(period, indicator)?;
    Ok(())
}
