//! classic-ta: classic technical indicators over price series
//!
//! This crate computes the Simple Moving Average, Exponential Moving Average,
//! Relative Strength Index and Bollinger Bands over ordered price observations.
//! Every indicator is a pure function of its input slice and parameters.
//!
//! # Features
//!
//! - **Compact outputs**: one value per complete window, no NaN padding
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Safety**: Typed errors for invalid periods and indeterminate values;
//!   finite input never yields NaN as long as window sums stay in range
//!
//! # Quick Start
//!
//! ```
//! use classic_ta::indicators::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 2.0).abs() < 1e-10);
//! assert!((result[2] - 4.0).abs() < 1e-10);
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//!
//! ## Momentum
//! - [`indicators::rsi()`]: Relative Strength Index
//!
//! ## Volatility
//! - [`indicators::bollinger()`]: Bollinger Bands
//!
//! # Error Handling
//!
//! All indicator functions return [`Result<T, Error>`]:
//!
//! ```
//! use classic_ta::indicators::{ema, sma};
//! use classic_ta::Error;
//!
//! // A zero period is always rejected
//! assert!(matches!(sma(&[1.0_f64, 2.0], 0), Err(Error::InvalidPeriod { .. })));
//!
//! // SMA answers a too-short series with an empty output...
//! assert!(sma(&[1.0_f64, 2.0], 10).unwrap().is_empty());
//!
//! // ...while EMA cannot seed and reports it
//! assert!(matches!(ema(&[1.0_f64, 2.0], 10), Err(Error::InsufficientData { .. })));
//! ```
//!
//! # Logging
//!
//! Rejected inputs are reported through [`tracing`] at `debug` level, and RSI
//! flat-window substitutions at `trace` level. The crate installs no
//! subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::{bollinger, ema, rsi, sma, BollingerOutput, FlatWindow};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, approx_eq_relative, series_approx_eq, EPSILON, LOOSE_EPSILON};
