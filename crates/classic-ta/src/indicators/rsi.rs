//! Relative Strength Index (RSI) indicator.
//!
//! The Relative Strength Index is a momentum oscillator that compares the size
//! of recent gains to recent losses on a scale of 0 to 100. Readings above 70
//! are traditionally read as overbought and readings below 30 as oversold.
//!
//! # Algorithm
//!
//! 1. Compute per-step price changes
//! 2. Split them into a gain series (positive changes) and a loss series
//!    (magnitudes of negative changes)
//! 3. Average each series over sliding windows of `period` changes
//! 4. `RS = avg_gain / avg_loss`, `RSI = 100 - 100 / (1 + RS)`
//!
//! Averages are plain window means, not Wilder-smoothed.
//!
//! # Formula
//!
//! ```text
//! Change[j] = Price[j+1] - Price[j]
//! Gain[j]   = max(Change[j], 0)
//! Loss[j]   = max(-Change[j], 0)
//!
//! AvgGain[k] = mean(Gain[k .. k+period])
//! AvgLoss[k] = mean(Loss[k .. k+period])
//! RSI[k]     = 100 - 100 / (1 + AvgGain[k] / AvgLoss[k])
//! ```
//!
//! for `k` in `0 .. changes - period`. The window for output `k` ends just
//! before change `k + period`, so the final change never enters a window and the
//! output has `data.len() - 1 - period` values. Series too short for that are
//! answered with an empty output.
//!
//! # Boundary Conditions
//!
//! - **No losses in the window**: RSI = 100
//! - **No gains in the window**: RSI = 0
//! - **No gains and no losses (flat window)**: decided by [`FlatWindow`];
//!   [`rsi`] reports the neutral value 50
//!
//! # Example
//!
//! ```
//! use classic_ta::indicators::rsi::rsi;
//!
//! let data = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5, 43.25, 43.0];
//! let result = rsi(&data, 5).unwrap();
//!
//! assert_eq!(result.len(), 4);
//! assert!(result.iter().all(|&v| (0.0..=100.0).contains(&v)));
//! ```

use tracing::trace;

use crate::error::{Error, Result};
use crate::kernels::window::window_means;
use crate::traits::{validate_output_len, validate_period, SeriesElement};

/// How RSI treats a window with neither gains nor losses.
///
/// Such a window has `avg_gain / avg_loss = 0 / 0`, which has no numeric value.
/// The same policy covers windows whose price changes overflow, where both
/// averages are infinite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlatWindow {
    /// Report the neutral reading 50.
    #[default]
    Neutral,
    /// Fail the whole computation with `Error::IndeterminateRsi`.
    Reject,
}

/// Returns the input index that the first RSI value aligns to.
///
/// Output `k` is computed from the price changes up to input index
/// `k + period`.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length that produces at least one RSI value.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::rsi_min_len;
///
/// assert_eq!(rsi_min_len(14), 16);
/// ```
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    period.saturating_add(2)
}

/// Returns the RSI output length for an input of `len` elements.
#[inline]
#[must_use]
pub const fn rsi_output_len(len: usize, period: usize) -> usize {
    if period == 0 {
        0
    } else {
        len.saturating_sub(1).saturating_sub(period)
    }
}

/// Computes the Relative Strength Index, reporting flat windows as 50.
///
/// # Arguments
///
/// * `data` - The input price data series
/// * `period` - The number of price changes per averaging window (commonly 14)
///
/// # Returns
///
/// A `Vec<T>` of `data.len() - 1 - period` values in `[0, 100]`, empty when the
/// series is too short.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::rsi;
///
/// // Strictly rising prices have no losses
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let result = rsi(&data, 3).unwrap();
/// assert_eq!(result.len(), 6);
/// assert!(result.iter().all(|&v| v == 100.0));
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rsi_with_policy(data, period, FlatWindow::Neutral)
}

/// Computes the Relative Strength Index with an explicit flat-window policy.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::IndeterminateRsi` if `policy` is [`FlatWindow::Reject`] and some
///   window has no gains and no losses, or both averages overflow
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::{rsi_with_policy, FlatWindow};
/// use classic_ta::Error;
///
/// let flat = vec![5.0_f64; 6];
/// assert_eq!(
///     rsi_with_policy(&flat, 2, FlatWindow::Reject),
///     Err(Error::IndeterminateRsi { index: 0 })
/// );
/// assert_eq!(rsi_with_policy(&flat, 2, FlatWindow::Neutral).unwrap(), vec![50.0; 3]);
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi_with_policy<T: SeriesElement>(
    data: &[T],
    period: usize,
    policy: FlatWindow,
) -> Result<Vec<T>> {
    validate_period(period)?;
    let mut output = vec![T::zero(); rsi_output_len(data.len(), period)];
    compute_rsi_core(data, period, policy, &mut output)?;
    Ok(output)
}

/// Computes the Relative Strength Index into a pre-allocated output buffer.
///
/// Flat windows are handled by `policy`. On error the contents of `output`
/// are unspecified.
///
/// # Returns
///
/// The number of values written to the front of `output`.
///
/// # Errors
///
/// The errors of [`rsi_with_policy`], plus `Error::BufferTooSmall` if `output`
/// is shorter than `data.len() - 1 - period`.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::{rsi_into, FlatWindow};
///
/// let data = vec![44.0_f64, 44.5, 45.0, 44.5, 44.0, 44.5, 45.0];
/// let mut output = vec![0.0; 7];
/// let written = rsi_into(&data, 3, FlatWindow::Neutral, &mut output).unwrap();
/// assert_eq!(written, 3);
/// ```
#[must_use = "this returns a Result with the written count, which should be used"]
pub fn rsi_into<T: SeriesElement>(
    data: &[T],
    period: usize,
    policy: FlatWindow,
    output: &mut [T],
) -> Result<usize> {
    validate_period(period)?;
    let count = rsi_output_len(data.len(), period);
    validate_output_len(output, count)?;

    compute_rsi_core(data, period, policy, &mut output[..count])?;
    Ok(count)
}

/// Core RSI computation.
///
/// Assumes a non-zero period and an `output` of exactly
/// `rsi_output_len(data.len(), period)` slots.
fn compute_rsi_core<T: SeriesElement>(
    data: &[T],
    period: usize,
    policy: FlatWindow,
    output: &mut [T],
) -> Result<()> {
    if output.is_empty() {
        return Ok(());
    }

    let zero = T::zero();
    let (gains, losses): (Vec<T>, Vec<T>) = data
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change >= zero {
                (change, zero)
            } else {
                (zero, change.abs())
            }
        })
        .unzip();

    // Windows never reach the final change.
    let usable = gains.len() - 1;
    let avg_gains = window_means(&gains[..usable], period)?;
    let avg_losses = window_means(&losses[..usable], period)?;

    for (index, ((slot, &avg_gain), &avg_loss)) in output
        .iter_mut()
        .zip(&avg_gains)
        .zip(&avg_losses)
        .enumerate()
    {
        *slot = rsi_value(avg_gain, avg_loss, policy, index)?;
    }

    Ok(())
}

/// Computes one RSI reading from a window's average gain and loss.
#[inline]
fn rsi_value<T: SeriesElement>(
    avg_gain: T,
    avg_loss: T,
    policy: FlatWindow,
    index: usize,
) -> Result<T> {
    let zero = T::zero();
    let hundred = T::hundred();

    let flat = avg_gain == zero && avg_loss == zero;
    // Changes beyond the float range average to inf / inf.
    let unbounded = avg_gain.is_infinite() && avg_loss.is_infinite();
    if flat || unbounded {
        return match policy {
            FlatWindow::Neutral => {
                trace!(index, unbounded, "indeterminate RSI window reported as neutral");
                Ok(T::fifty())
            }
            FlatWindow::Reject => Err(Error::IndeterminateRsi { index }),
        };
    }

    if avg_loss == zero {
        return Ok(hundred);
    }

    if avg_gain == zero {
        return Ok(zero);
    }

    let rs = avg_gain / avg_loss;
    Ok(hundred - hundred / (T::one() + rs))
}

// ==================== Configuration Type ====================

/// RSI configuration with fluent builder API.
///
/// Defaults to the conventional 14-period RSI with flat windows reported as 50.
///
/// # Example
///
/// ```
/// use classic_ta::indicators::rsi::{FlatWindow, Rsi};
///
/// let prices = vec![
///     44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
///     45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
/// ];
///
/// let result = Rsi::default().compute(&prices).unwrap();
/// assert_eq!(result.len(), 5);
///
/// let strict = Rsi::new()
///     .period(5)
///     .flat_window(FlatWindow::Reject)
///     .compute(&prices)
///     .unwrap();
/// assert_eq!(strict.len(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
    flat_window: FlatWindow,
}

impl Default for Rsi {
    /// Creates an RSI configuration with the standard period of 14.
    fn default() -> Self {
        Self {
            period: 14,
            flat_window: FlatWindow::Neutral,
        }
    }
}

impl Rsi {
    /// Creates a new RSI configuration with the standard period of 14.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the averaging period.
    ///
    /// Default: 14
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the flat-window policy.
    ///
    /// Default: [`FlatWindow::Neutral`]
    #[must_use]
    pub const fn flat_window(mut self, policy: FlatWindow) -> Self {
        self.flat_window = policy;
        self
    }

    /// Computes RSI using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same as [`rsi_with_policy`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        rsi_with_policy(data, self.period, self.flat_window)
    }

    /// Computes RSI into a pre-allocated buffer and returns the written count.
    ///
    /// # Errors
    ///
    /// Same as [`rsi_into`].
    pub fn compute_into<T: SeriesElement>(&self, data: &[T], output: &mut [T]) -> Result<usize> {
        rsi_into(data, self.period, self.flat_window, output)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the flat-window policy.
    #[must_use]
    pub const fn get_flat_window(&self) -> FlatWindow {
        self.flat_window
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        rsi_lookback(self.period)
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        rsi_min_len(self.period)
    }
}
