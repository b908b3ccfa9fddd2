//! Input validation tests.
//!
//! These pin down how each indicator answers degenerate input: zero periods,
//! empty and too-short series, undersized output buffers, and flat RSI
//! windows under the strict policy.

#![allow(clippy::float_cmp)]

use classic_ta::error::Error;
use classic_ta::indicators::{
    bollinger::{bollinger, bollinger_into, rolling_stddev, Bollinger, BollingerOutput},
    ema::{ema, ema_into, ema_wilder, ema_with_alpha},
    rsi::{rsi, rsi_into, rsi_with_policy, FlatWindow, Rsi},
    sma::{sma, sma_into},
};

// ==================== Zero Period ====================

#[test]
fn validation_zero_period_sma() {
    let result = sma(&[1.0_f64, 2.0, 3.0], 0);
    assert!(matches!(result, Err(Error::InvalidPeriod { period: 0, .. })));
}

#[test]
fn validation_zero_period_ema() {
    let result = ema(&[1.0_f64, 2.0, 3.0], 0);
    assert!(matches!(result, Err(Error::InvalidPeriod { period: 0, .. })));
}

#[test]
fn validation_zero_period_rsi() {
    let result = rsi(&[1.0_f64, 2.0, 3.0], 0);
    assert!(matches!(result, Err(Error::InvalidPeriod { period: 0, .. })));
}

#[test]
fn validation_zero_period_bollinger() {
    let result = bollinger(&[1.0_f64, 2.0, 3.0], 0, 2.0);
    assert!(matches!(result, Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(
        rolling_stddev(&[1.0_f64, 2.0, 3.0], 0),
        Err(Error::InvalidPeriod { .. })
    ));
}

#[test]
fn validation_zero_period_wins_over_empty_input() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(sma(&empty, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(ema(&empty, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(rsi(&empty, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(bollinger(&empty, 0, 2.0), Err(Error::InvalidPeriod { .. })));
}

#[test]
fn validation_zero_period_config_types() {
    let data = [1.0_f64, 2.0, 3.0, 4.0];
    assert!(matches!(
        Bollinger::new().period(0).compute(&data),
        Err(Error::InvalidPeriod { .. })
    ));
    assert!(matches!(
        Rsi::new().period(0).compute(&data),
        Err(Error::InvalidPeriod { .. })
    ));
}

// ==================== Empty Input ====================

#[test]
fn validation_empty_input_is_empty_output() {
    let empty: Vec<f64> = vec![];
    assert!(sma(&empty, 5).unwrap().is_empty());
    assert!(rsi(&empty, 14).unwrap().is_empty());
    assert!(bollinger(&empty, 20, 2.0).unwrap().is_empty());
}

#[test]
fn validation_empty_input_ema() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(ema(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(ema_wilder(&empty, 5), Err(Error::EmptyInput)));
}

// ==================== Too-Short Input ====================

#[test]
fn validation_short_input_sma_is_empty() {
    assert!(sma(&[1.0_f64, 2.0], 3).unwrap().is_empty());
}

#[test]
fn validation_short_input_bollinger_is_empty() {
    let bands = bollinger(&[1.0_f64, 2.0], 3, 2.0).unwrap();
    assert!(bands.middle.is_empty());
    assert!(bands.upper.is_empty());
    assert!(bands.lower.is_empty());
}

#[test]
fn validation_short_input_rsi_is_empty() {
    // RSI needs period + 2 observations for its first value.
    for len in 0..5 {
        let data: Vec<f64> = (0..len).map(f64::from).collect();
        assert!(rsi(&data, 3).unwrap().is_empty(), "len {len}");
    }
    assert_eq!(rsi(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap().len(), 1);
}

#[test]
fn validation_short_input_ema_errors() {
    let result = ema(&[1.0_f64, 2.0], 3);
    match result {
        Err(Error::InsufficientData {
            required,
            actual,
            indicator,
        }) => {
            assert_eq!(required, 3);
            assert_eq!(actual, 2);
            assert_eq!(indicator, "ema");
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn validation_short_input_ema_with_alpha() {
    assert!(matches!(
        ema_with_alpha(&[1.0_f64, 2.0], 5, 0.5),
        Err(Error::InsufficientData { .. })
    ));
}

#[test]
fn validation_period_larger_than_input() {
    let data = vec![1.0_f64; 10];
    let period = usize::MAX / 2;
    assert!(sma(&data, period).unwrap().is_empty());
    assert!(rsi(&data, period).unwrap().is_empty());
    assert!(bollinger(&data, period, 2.0).unwrap().is_empty());
    assert!(matches!(ema(&data, period), Err(Error::InsufficientData { .. })));
}

// ==================== Output Buffers ====================

#[test]
fn validation_buffer_too_small_sma() {
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let mut output = [0.0_f64; 2];
    let result = sma_into(&data, 3, &mut output);
    assert!(matches!(
        result,
        Err(Error::BufferTooSmall {
            required: 3,
            actual: 2
        })
    ));
}

#[test]
fn validation_buffer_too_small_ema() {
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let mut output = [0.0_f64; 1];
    assert!(matches!(
        ema_into(&data, 3, &mut output),
        Err(Error::BufferTooSmall { required: 3, .. })
    ));
}

#[test]
fn validation_buffer_too_small_rsi() {
    let data = [1.0_f64, 2.0, 4.0, 3.0, 5.0, 6.0];
    let mut output = [0.0_f64; 1];
    assert!(matches!(
        rsi_into(&data, 2, FlatWindow::Neutral, &mut output),
        Err(Error::BufferTooSmall { required: 3, .. })
    ));
}

#[test]
fn validation_buffer_too_small_bollinger() {
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let mut output = BollingerOutput::with_len(2);
    assert!(matches!(
        bollinger_into(&data, 3, 2.0, &mut output),
        Err(Error::BufferTooSmall { required: 3, .. })
    ));
}

#[test]
fn validation_oversized_buffer_is_accepted() {
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let mut output = [f64::NAN; 10];
    let written = sma_into(&data, 3, &mut output).unwrap();
    assert_eq!(written, 3);
    assert_eq!(&output[..3], &[2.0, 3.0, 4.0]);
    // Slots past the written count are left alone.
    assert!(output[3].is_nan());
}

// ==================== Flat RSI Windows ====================

#[test]
fn validation_flat_window_neutral_by_default() {
    let data = [5.0_f64; 8];
    let result = rsi(&data, 3).unwrap();
    assert_eq!(result, vec![50.0; 4]);
}

#[test]
fn validation_flat_window_rejected_under_strict_policy() {
    let data = [5.0_f64; 8];
    let result = rsi_with_policy(&data, 3, FlatWindow::Reject);
    assert!(matches!(result, Err(Error::IndeterminateRsi { index: 0 })));
}

#[test]
fn validation_flat_window_reports_first_flat_index() {
    // Changes: +1, 0, 0, 0, +1. Windows of three: [+1,0,0], [0,0,0].
    let data = [1.0_f64, 2.0, 2.0, 2.0, 2.0, 3.0];
    let result = rsi_with_policy(&data, 3, FlatWindow::Reject);
    assert!(matches!(result, Err(Error::IndeterminateRsi { index: 1 })));
}

// ==================== Non-Finite Input ====================

#[test]
fn validation_nan_propagates_through_sma() {
    let data = [1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
    let result = sma(&data, 2).unwrap();
    assert!(result[0].is_nan());
    assert!(result[1].is_nan());
    assert_eq!(result[2], 3.5);
    assert_eq!(result[3], 4.5);
}

#[test]
fn validation_error_messages_are_descriptive() {
    let message = ema(&[1.0_f64], 5).unwrap_err().to_string();
    assert!(message.contains("ema"), "{message}");
    assert!(message.contains('5'), "{message}");

    let message = sma(&[1.0_f64], 0).unwrap_err().to_string();
    assert!(message.contains("period"), "{message}");
}
