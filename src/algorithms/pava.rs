//! Pool-Adjacent-Violators algorithm.
//!
//! ## Purpose
//!
//! This module computes the least-squares projection of a sequence onto the
//! cone of monotone sequences. It is the computational core of the crate.
//!
//! ## Design notes
//!
//! * **Backward pass**: Positions are visited from last to first. Each one
//!   starts a candidate segment that absorbs the segments to its right for as
//!   long as they would violate the order.
//! * **Stack order**: The stack grows leftwards, so its top is always the
//!   left-most segment formed so far. Expansion walks it top to bottom.
//! * **Direction**: A non-increasing fit is the non-decreasing fit of the
//!   negated sequence, negated back. Negation is exact, so it is applied on
//!   read and on expansion instead of copying the input.
//! * **Iteration**: The merge loop is a plain `while`; no recursion.
//!
//! ## Key concepts
//!
//! * **Pooling rule**: A candidate absorbs the top segment while
//!   `top.mean * candidate.width <= candidate.sum`.
//! * **Projection theorem**: The optimal value inside a pooled run is the
//!   arithmetic mean of the run.
//!
//! ## Invariants
//!
//! * Sealed segments on the stack have strictly increasing means in
//!   position order (in the working, sign-adjusted space). Equal neighbours
//!   only remain where pooling them would overflow the running sum.
//! * Segment widths sum to the input length.
//! * Every position is pushed once and popped at most once: O(n) time.
//!
//! ## Non-goals
//!
//! * Weighted observations.
//! * Multi-dimensional or streaming isotonic regression.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::iter::repeat_n;
use num_traits::Float;

// Internal dependencies
use crate::math::order::Direction;
use crate::primitives::segment::PooledSegment;

// ============================================================================
// Block
// ============================================================================

/// A run of consecutive output positions sharing one fitted value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<T> {
    /// Index of the first covered position.
    pub start: usize,

    /// Number of covered positions.
    pub len: usize,

    /// Fitted value shared by the covered positions.
    pub value: T,
}

impl<T> Block<T> {
    /// Exclusive end index of the block.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

// ============================================================================
// Pooling
// ============================================================================

#[inline]
fn direction_sign<T: Float>(direction: Direction) -> T {
    match direction {
        Direction::Increasing => T::one(),
        Direction::Decreasing => -T::one(),
    }
}

/// Run the backward pooling pass over `values`, leaving the final segments in
/// `stack`.
///
/// `stack` is cleared first. On return its top (last element) is the
/// left-most segment and its bottom the right-most. Means and sums are kept
/// in the sign-adjusted working space of `direction`.
pub fn pool_segments<T: Float>(
    values: &[T],
    direction: Direction,
    stack: &mut Vec<PooledSegment<T>>,
) {
    stack.clear();

    let sign = direction_sign::<T>(direction);
    let mut positions = values.iter().rev();

    // Seed with the last value
    match positions.next() {
        Some(&last) => stack.push(PooledSegment::singleton(sign * last)),
        None => return,
    }

    for &value in positions {
        let mut candidate = PooledSegment::singleton(sign * value);

        while let Some(top) = stack.last() {
            if !candidate.must_absorb(top) {
                break;
            }
            candidate.absorb(top);
            stack.pop();
        }

        candidate.seal();
        stack.push(candidate);
    }
}

/// Expand pooled segments into per-position fitted values, appending to `out`
/// in original left-to-right order.
pub fn expand_segments<T: Float>(
    stack: &[PooledSegment<T>],
    direction: Direction,
    out: &mut Vec<T>,
) {
    let sign = direction_sign::<T>(direction);
    let total: usize = stack.iter().map(|s| s.width).sum();
    out.reserve(total);

    for segment in stack.iter().rev() {
        out.extend(repeat_n(sign * segment.mean, segment.width));
    }
}

/// Describe pooled segments as left-to-right blocks of output positions.
pub fn segments_to_blocks<T: Float>(
    stack: &[PooledSegment<T>],
    direction: Direction,
) -> Vec<Block<T>> {
    let sign = direction_sign::<T>(direction);
    let mut start = 0;

    stack
        .iter()
        .rev()
        .map(|segment| {
            let block = Block {
                start,
                len: segment.width,
                value: sign * segment.mean,
            };
            start += segment.width;
            block
        })
        .collect()
}

/// Project `values` onto the monotone cone selected by `direction`.
///
/// Returns a sequence of the same length that is monotone in `direction` and
/// minimises the sum of squared differences to `values`.
pub fn pool_adjacent_violators<T: Float>(values: &[T], direction: Direction) -> Vec<T> {
    let mut stack = Vec::with_capacity(values.len());
    pool_segments(values, direction, &mut stack);

    let mut fitted = Vec::with_capacity(values.len());
    expand_segments(&stack, direction, &mut fitted);
    fitted
}
