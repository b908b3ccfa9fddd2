//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use classic_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! let bands = Bollinger::new().period(3).compute(&prices).unwrap();
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indicator functions
pub use crate::indicators::{
    bollinger, ema, ema_wilder, ema_with_alpha, rolling_stddev, rsi, rsi_with_policy, sma,
};

// Indicator functions (_into API for pre-allocated buffers)
pub use crate::indicators::{bollinger_into, ema_into, rsi_into, sma_into};

// Output and configuration types
pub use crate::indicators::{Bollinger, BollingerOutput, FlatWindow, Rsi};

// Lookback and length helpers
pub use crate::indicators::{
    bollinger_lookback, bollinger_min_len, bollinger_output_len, ema_lookback, ema_min_len,
    ema_output_len, rsi_lookback, rsi_min_len, rsi_output_len, sma_lookback, sma_min_len,
    sma_output_len,
};
