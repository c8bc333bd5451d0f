//! Monotone direction and order predicates.
//!
//! ## Purpose
//!
//! This module defines the direction of the monotonicity constraint and the
//! predicates used to check a sequence against it.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: `Direction` selects the constraint cone.
//! * **Comparisons**: NaN compares false, so a NaN pair is never counted as
//!   ordered or as a violation.
//!
//! ## Invariants
//!
//! * Sequences of length 0 or 1 are ordered in both directions.
//!
//! ## Non-goals
//!
//! * Partial orders or multi-dimensional constraints.

// External dependencies
use num_traits::Float;

/// Direction of the monotonicity constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Fitted values must be non-decreasing.
    #[default]
    Increasing,

    /// Fitted values must be non-increasing.
    Decreasing,
}

impl Direction {
    /// Whether `left` followed by `right` respects this direction.
    #[inline]
    pub fn permits<T: Float>(&self, left: T, right: T) -> bool {
        match self {
            Direction::Increasing => left <= right,
            Direction::Decreasing => left >= right,
        }
    }

    /// Whether `left` followed by `right` breaks this direction.
    #[inline]
    pub fn violated_by<T: Float>(&self, left: T, right: T) -> bool {
        match self {
            Direction::Increasing => left > right,
            Direction::Decreasing => left < right,
        }
    }
}

/// Check whether every adjacent pair of `values` respects `direction`.
pub fn is_monotone<T: Float>(values: &[T], direction: Direction) -> bool {
    values.windows(2).all(|w| direction.permits(w[0], w[1]))
}

/// Count the adjacent pairs of `values` that break `direction`.
pub fn count_violations<T: Float>(values: &[T], direction: Direction) -> usize {
    values
        .windows(2)
        .filter(|w| direction.violated_by(w[0], w[1]))
        .count()
}
