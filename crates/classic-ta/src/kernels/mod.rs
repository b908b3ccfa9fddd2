//! Window kernels shared by the indicators.
//!
//! # Kernels
//!
//! - [`window`]: per-window mean and population variance over sliding windows
//!
//! Each window is summed directly rather than through a running sum. This is
//! `O(n * period)`, but a window of one element reproduces its input exactly
//! and long series accumulate no add/subtract drift.

pub mod window;

pub use window::{window_mean, window_means, window_population_variance};
