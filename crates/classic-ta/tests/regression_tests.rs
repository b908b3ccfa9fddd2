//! Synthetic market regression suite.
//!
//! Generates a deterministic close series with a seeded RNG and runs every
//! indicator over it, checking that:
//! - Nothing panics on realistic data
//! - Outputs are finite
//! - Output lengths match the length helpers
//! - Bounds hold (RSI 0-100, band ordering)
//!
//! The series mixes trends, range-bound stretches, volatility clusters, gaps
//! and a run of unchanged closes to exercise the flat RSI window.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use classic_ta::indicators::{
    bollinger::{bollinger, bollinger_output_len},
    ema::{ema, ema_output_len, ema_wilder},
    rsi::{rsi, rsi_output_len, rsi_with_policy, FlatWindow},
    sma::{sma, sma_output_len},
};
use classic_ta::Error;

/// Fixed seed so every run sees the same series.
const SEED: u64 = 0xC1A5_51C0_2026;

/// Roughly three years of daily closes.
const DATA_POINTS: usize = 750;

const STARTING_PRICE: f64 = 100.0;

#[derive(Debug, Clone, Copy)]
enum MarketRegime {
    Uptrend,
    Downtrend,
    RangeBound,
    HighVolatility,
}

/// Generates closes that drift through randomly chosen market regimes.
fn generate_closes(seed: u64, num_points: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut closes = Vec::with_capacity(num_points);

    let mut price = STARTING_PRICE;
    let mut regime = MarketRegime::RangeBound;
    let mut remaining = 0_i32;

    for _ in 0..num_points {
        if remaining <= 0 {
            regime = match rng.gen_range(0..4) {
                0 => MarketRegime::Uptrend,
                1 => MarketRegime::Downtrend,
                2 => MarketRegime::RangeBound,
                _ => MarketRegime::HighVolatility,
            };
            remaining = rng.gen_range(20..80);
        }
        remaining -= 1;

        let (drift, volatility) = match regime {
            MarketRegime::Uptrend => (0.001, 0.01),
            MarketRegime::Downtrend => (-0.001, 0.012),
            MarketRegime::RangeBound => (0.0, 0.008),
            MarketRegime::HighVolatility => (rng.gen_range(-0.002..0.002), 0.025),
        };

        let gap = if rng.gen_bool(0.05) {
            rng.gen_range(-0.03..0.03)
        } else {
            0.0
        };

        price *= 1.0 + gap + drift + rng.gen_range(-volatility..volatility);
        price = price.max(1.0);
        closes.push(price);
    }

    closes
}

/// The generated series with a halted stretch of identical closes spliced in.
fn closes_with_halt() -> Vec<f64> {
    let mut closes = generate_closes(SEED, DATA_POINTS);
    let halted = closes[400];
    for close in &mut closes[400..420] {
        *close = halted;
    }
    closes
}

#[test]
fn regression_generator_is_deterministic() {
    assert_eq!(
        generate_closes(SEED, DATA_POINTS),
        generate_closes(SEED, DATA_POINTS)
    );
    assert_ne!(
        generate_closes(SEED, DATA_POINTS),
        generate_closes(SEED + 1, DATA_POINTS)
    );
}

#[test]
fn regression_sma_lengths_and_finiteness() {
    let closes = generate_closes(SEED, DATA_POINTS);
    for period in [1, 5, 20, 50, 200] {
        let result = sma(&closes, period).unwrap();
        assert_eq!(result.len(), sma_output_len(closes.len(), period));
        assert!(result.iter().all(|v| v.is_finite()), "period {period}");
    }
}

#[test]
fn regression_ema_lengths_and_finiteness() {
    let closes = generate_closes(SEED, DATA_POINTS);
    for period in [1, 9, 12, 26, 200] {
        let standard = ema(&closes, period).unwrap();
        let wilder = ema_wilder(&closes, period).unwrap();
        assert_eq!(standard.len(), ema_output_len(closes.len(), period));
        assert_eq!(wilder.len(), standard.len());
        assert!(standard.iter().all(|v| v.is_finite()), "period {period}");
        assert!(wilder.iter().all(|v| v.is_finite()), "period {period}");
    }
}

#[test]
fn regression_rsi_bounds() {
    let closes = closes_with_halt();
    for period in [2, 7, 14, 21] {
        let result = rsi(&closes, period).unwrap();
        assert_eq!(result.len(), rsi_output_len(closes.len(), period));
        for (i, &v) in result.iter().enumerate() {
            assert!(
                v.is_finite() && (0.0..=100.0).contains(&v),
                "rsi({period})[{i}] = {v}"
            );
        }
    }
}

#[test]
fn regression_rsi_halt_is_neutral() {
    let closes = closes_with_halt();
    let result = rsi(&closes, 14).unwrap();
    // Output index i covers changes i..i+14; the halt spans changes 400..419.
    for &v in &result[400..=405] {
        assert_eq!(v, 50.0);
    }
}

#[test]
fn regression_rsi_halt_rejected_under_strict_policy() {
    let closes = closes_with_halt();
    let result = rsi_with_policy(&closes, 14, FlatWindow::Reject);
    assert_eq!(result, Err(Error::IndeterminateRsi { index: 400 }));

    // The untouched series has no flat windows.
    let clean = generate_closes(SEED, DATA_POINTS);
    assert!(rsi_with_policy(&clean, 14, FlatWindow::Reject).is_ok());
}

#[test]
fn regression_bollinger_band_order() {
    let closes = generate_closes(SEED, DATA_POINTS);
    for (period, k) in [(10, 1.5), (20, 2.0), (50, 2.5)] {
        let bands = bollinger(&closes, period, k).unwrap();
        assert_eq!(bands.len(), bollinger_output_len(closes.len(), period));
        for i in 0..bands.len() {
            assert!(bands.upper[i].is_finite() && bands.lower[i].is_finite());
            assert!(bands.upper[i] >= bands.middle[i], "upper[{i}]");
            assert!(bands.middle[i] >= bands.lower[i], "lower[{i}]");
        }
    }
}

#[test]
fn regression_many_seeds_never_panic() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..20 {
        let seed: u64 = rng.gen();
        let len = rng.gen_range(0..120);
        let period = rng.gen_range(1..30);
        let closes = generate_closes(seed, len);

        assert_eq!(sma(&closes, period).unwrap().len(), sma_output_len(len, period));
        assert_eq!(rsi(&closes, period).unwrap().len(), rsi_output_len(len, period));
        assert_eq!(
            bollinger(&closes, period, 2.0).unwrap().len(),
            bollinger_output_len(len, period)
        );
        match ema(&closes, period) {
            Ok(values) => assert_eq!(values.len(), ema_output_len(len, period)),
            Err(Error::EmptyInput) => assert_eq!(len, 0),
            Err(Error::InsufficientData { .. }) => assert!(len < period),
            Err(other) => panic!("unexpected error {other:?}"),
        }
    }
}
