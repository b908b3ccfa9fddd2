//! Technical analysis indicators.
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` types via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Compact output**: One value per complete window, no NaN padding. Each
//!   module exposes `*_lookback` to map output index 0 back to the input
//! - **Pure**: No state is kept between calls; inputs are never mutated
//! - **Error-safe**: Return typed errors for invalid periods instead of
//!   producing NaN or infinity
//!
//! # Indicators
//!
//! - [`sma`] - Simple Moving Average: arithmetic mean over a sliding window
//! - [`ema`] - Exponential Moving Average: SMA-seeded recursive average
//! - [`rsi`] - Relative Strength Index: windowed gains versus losses on `[0, 100]`
//! - [`bollinger`] - Bollinger Bands: SMA ± k population standard deviations
//!
//! # Short Input Policy
//!
//! | Indicator | `data.len()` too short |
//! |-----------|------------------------|
//! | SMA       | empty output           |
//! | EMA       | `Error::InsufficientData` (`Error::EmptyInput` if empty) |
//! | RSI       | empty output           |
//! | Bollinger | empty bands            |
//!
//! # Example
//!
//! ```
//! use classic_ta::indicators::{bollinger, ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! let bands = bollinger(&prices, 5, 2.0).unwrap();
//!
//! assert_eq!(sma_result.len(), 6);
//! assert_eq!(ema_result.len(), 6);
//! assert_eq!(rsi_result.len(), 4);
//! assert_eq!(bands.len(), 6);
//! ```

pub mod bollinger;
pub mod ema;
pub mod rsi;
pub mod sma;

pub use bollinger::{
    bollinger, bollinger_into, bollinger_lookback, bollinger_min_len, bollinger_output_len,
    rolling_stddev, Bollinger, BollingerOutput,
};
pub use ema::{
    ema, ema_into, ema_lookback, ema_min_len, ema_multiplier, ema_output_len, ema_wilder,
    ema_with_alpha, ema_with_alpha_into,
};
pub use rsi::{
    rsi, rsi_into, rsi_lookback, rsi_min_len, rsi_output_len, rsi_with_policy, FlatWindow, Rsi,
};
pub use sma::{sma, sma_into, sma_lookback, sma_min_len, sma_output_len};
