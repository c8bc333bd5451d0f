//! Squared-error and residual helpers.
//!
//! ## Purpose
//!
//! This module computes the quantities the projection minimises and the
//! diagnostics report: residuals and sums of squared differences.
//!
//! ## Invariants
//!
//! * Both slices must have the same length; only the common prefix is used
//!   otherwise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Residuals `observed[i] - fitted[i]`.
pub fn residuals<T: Float>(observed: &[T], fitted: &[T]) -> Vec<T> {
    observed
        .iter()
        .zip(fitted.iter())
        .map(|(&o, &f)| o - f)
        .collect()
}

/// Sum of squared differences between two sequences.
///
/// # Formula
///
/// ```text
/// SSE = Σ (a_i - b_i)²
/// ```
pub fn sum_squared_error<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| {
            let d = x - y;
            acc + d * d
        })
}
