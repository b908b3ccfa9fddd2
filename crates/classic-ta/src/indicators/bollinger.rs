//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope made of three bands:
//! - **Middle Band**: Simple Moving Average (SMA) of the price
//! - **Upper Band**: Middle Band + (k × standard deviation)
//! - **Lower Band**: Middle Band - (k × standard deviation)
//!
//! Where `k` is typically 2 (two standard deviations).
//!
//! # Mathematical Conventions
//!
//! - **Population Standard Deviation**: divides by `period`, not `period - 1`.
//!   Users migrating from sample-stddev implementations (e.g., Excel) will see
//!   slightly narrower bands.
//! - **Variance Algorithm**: each window's squared deviations are summed around
//!   that window's own mean. A flat window has a standard deviation of exactly
//!   zero.
//! - **Multiplier**: `k` is applied literally. A negative `k` puts the "upper"
//!   band below the middle band.
//!
//! # Formula
//!
//! ```text
//! Middle[i] = mean(P[i .. i+period])
//! StdDev[i] = sqrt(mean((P[j] - Middle[i])^2 for j in i .. i+period))
//! Upper[i]  = Middle[i] + k × StdDev[i]
//! Lower[i]  = Middle[i] - k × StdDev[i]
//! ```
//!
//! # Example
//!
//! ```
//! use classic_ta::indicators::bollinger::bollinger;
//!
//! let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let result = bollinger(&data, 5, 2.0).unwrap();
//!
//! // One value per complete window
//! assert_eq!(result.len(), 6);
//!
//! // Upper > Middle > Lower for any non-zero volatility
//! assert!(result.upper[0] > result.middle[0]);
//! assert!(result.middle[0] > result.lower[0]);
//! ```

use crate::error::Result;
use crate::kernels::window::{window_mean, window_population_variance};
use crate::traits::{validate_output_len, validate_period, SeriesElement};

/// Returns the input index that the first band values align to.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// assert_eq!(bollinger_lookback(5), 4);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length that produces at least one band value.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    period
}

/// Returns the length of each band for an input of `len` elements.
#[inline]
#[must_use]
pub const fn bollinger_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < period {
        0
    } else {
        len - period + 1
    }
}

/// Output structure containing all three Bollinger Bands.
///
/// The three vectors are index-aligned and share one length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BollingerOutput<T> {
    /// The middle band (Simple Moving Average).
    pub middle: Vec<T>,
    /// The upper band (middle + k × stddev).
    pub upper: Vec<T>,
    /// The lower band (middle - k × stddev).
    pub lower: Vec<T>,
}

impl<T: SeriesElement> BollingerOutput<T> {
    /// Creates an output with `len` zeroed slots per band, ready for
    /// [`bollinger_into`].
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            middle: vec![T::zero(); len],
            upper: vec![T::zero(); len],
            lower: vec![T::zero(); len],
        }
    }

    /// Number of values in each band.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true when there are no band values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Distance between the upper and lower band at each index.
    ///
    /// Equals `2 × k × stddev`, so it is negative when `k` is.
    #[must_use]
    pub fn bandwidth(&self) -> Vec<T> {
        self.upper
            .iter()
            .zip(&self.lower)
            .map(|(&u, &l)| u - l)
            .collect()
    }
}

/// Computes Bollinger Bands for a data series.
///
/// # Arguments
///
/// * `data` - The input data series (typically closing prices)
/// * `period` - The window length for the mean and standard deviation (commonly 20)
/// * `k` - The standard deviation multiplier (commonly 2.0)
///
/// # Returns
///
/// A [`BollingerOutput`] whose bands each hold `data.len() - period + 1`
/// values; all three are empty when `data` is shorter than `period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::bollinger::bollinger;
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let result = bollinger(&data, 3, 2.0).unwrap();
///
/// assert_eq!(result.len(), 8);
/// assert!((result.middle[0] - 2.0).abs() < 1e-10);
///
/// // Three consecutive integers have population stddev sqrt(2/3)
/// let stddev = (2.0_f64 / 3.0).sqrt();
/// assert!((result.upper[0] - (2.0 + 2.0 * stddev)).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with Bollinger Bands values, which should be used"]
pub fn bollinger<T: SeriesElement>(data: &[T], period: usize, k: T) -> Result<BollingerOutput<T>> {
    validate_period(period)?;

    let mut output = BollingerOutput::with_len(bollinger_output_len(data.len(), period));
    bollinger_into(data, period, k, &mut output)?;
    Ok(output)
}

/// Computes Bollinger Bands into pre-allocated output buffers.
///
/// Writes to the front of each band and leaves any extra slots untouched.
///
/// # Returns
///
/// The number of values written per band.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::BufferTooSmall` if any band is shorter than the output length
///
/// # Example
///
/// ```
/// use classic_ta::indicators::bollinger::{bollinger_into, BollingerOutput};
///
/// let data = vec![20.0, 21.0, 22.0, 21.5, 22.5];
/// let mut output = BollingerOutput::<f64>::with_len(5);
/// let written = bollinger_into(&data, 3, 2.0, &mut output).unwrap();
///
/// assert_eq!(written, 3);
/// ```
#[must_use = "this returns a Result with the written count, which should be used"]
pub fn bollinger_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    k: T,
    output: &mut BollingerOutput<T>,
) -> Result<usize> {
    validate_period(period)?;
    let count = bollinger_output_len(data.len(), period);
    validate_output_len(&output.middle, count)?;
    validate_output_len(&output.upper, count)?;
    validate_output_len(&output.lower, count)?;

    for (i, window) in data.windows(period).enumerate() {
        let mean = window_mean(window)?;
        // 0 * inf is NaN when the squared deviations overflow.
        let offset = if k == T::zero() {
            T::zero()
        } else {
            k * window_population_variance(window, mean)?.sqrt()
        };

        output.middle[i] = mean;
        output.upper[i] = mean + offset;
        output.lower[i] = mean - offset;
    }

    Ok(count)
}

/// Computes the rolling population standard deviation of a data series.
///
/// This is the deviation series that sets the band width. The output has
/// `data.len() - period + 1` values, empty when the data is shorter than the
/// period.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::bollinger::rolling_stddev;
///
/// let result = rolling_stddev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], 8).unwrap();
/// assert!((result[0] - 2.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the standard deviation values, which should be used"]
pub fn rolling_stddev<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    data.windows(period)
        .map(|window| {
            let mean = window_mean(window)?;
            Ok(window_population_variance(window, mean)?.sqrt())
        })
        .collect()
}

// ==================== Configuration Type ====================

/// Bollinger Bands configuration with fluent builder API.
///
/// Provides the conventional defaults (period=20, `std_dev=2.0`) and fluent
/// setters for customization.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::bollinger::Bollinger;
///
/// let prices = vec![
///     44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0,
///     45.5, 44.5, 43.5, 44.0, 45.0, 46.0, 46.5, 45.5, 44.5, 45.0,
/// ];
///
/// // Use defaults (20, 2.0)
/// let result = Bollinger::default().compute(&prices).unwrap();
/// assert_eq!(result.len(), 1);
///
/// // Or customize with fluent API
/// let result = Bollinger::new()
///     .period(10)
///     .std_dev(2.5)
///     .compute(&prices)
///     .unwrap();
/// assert_eq!(result.len(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
}

impl Default for Bollinger {
    /// Creates a Bollinger Bands configuration with standard parameters (20, 2.0).
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a new Bollinger Bands configuration with standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    ///
    /// Default: 20
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier for the bands.
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Computes Bollinger Bands using the configured parameters.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPeriod` if the period is 0
    /// - `Error::NumericConversion` if the multiplier does not fit `T`
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BollingerOutput<T>> {
        let std_dev = T::from_f64(self.std_dev)?;
        bollinger(data, self.period, std_dev)
    }

    /// Computes Bollinger Bands into a pre-allocated output struct.
    ///
    /// Returns the number of values written per band.
    ///
    /// # Errors
    ///
    /// The errors of [`Bollinger::compute`], plus `Error::BufferTooSmall`.
    pub fn compute_into<T: SeriesElement>(
        &self,
        data: &[T],
        output: &mut BollingerOutput<T>,
    ) -> Result<usize> {
        let std_dev = T::from_f64(self.std_dev)?;
        bollinger_into(data, self.period, std_dev, output)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        bollinger_min_len(self.period)
    }
}
