//! Shared test utilities for classic-ta tests.

/// Approximate equality check; two NaN values are considered equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts two series have equal length and agree element-wise within `eps`.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64, label: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{label}: length mismatch (got {}, expected {})",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(a, e, eps),
            "{label}[{i}]: got {a}, expected {e} (tolerance {eps})"
        );
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Deterministic price path used by the integration tests.
#[allow(dead_code)]
pub fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = price.max(10.0);
        data.push(price);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0, 2.0, EPSILON));
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
    }

    #[test]
    fn test_generate_series_is_positive() {
        let data = generate_series(500);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&p| p >= 10.0));
    }
}
