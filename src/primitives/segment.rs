//! Pooled segments for the Pool-Adjacent-Violators pass.
//!
//! ## Purpose
//!
//! A pooled segment stands for a contiguous run of input positions that share
//! one fitted value. The projection pass builds, merges and finally expands
//! these segments.
//!
//! ## Design notes
//!
//! * **Sum and count**: A segment carries its running sum and width. The mean
//!   is divided out exactly once, when the segment is sealed.
//! * **Division-free comparison**: Whether a segment must absorb its right
//!   neighbour is decided with `right.mean * width <= sum`.
//!
//! ## Key concepts
//!
//! * **Candidate**: A segment still absorbing neighbours; its `mean` is stale.
//! * **Sealed**: A segment whose `mean` equals `sum / width`.
//!
//! ## Invariants
//!
//! * `width >= 1`.
//! * Two finite segments with equal means are never merged into a
//!   non-finite sum.
//! * Absorbing adds widths and sums; nothing else mutates a segment.
//!
//! ## Non-goals
//!
//! * Weighted observations. Every position contributes a unit weight.

// External dependencies
use num_traits::Float;

// ============================================================================
// Pooled Segment
// ============================================================================

/// A maximal run of positions merged into one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PooledSegment<T> {
    /// Number of original positions covered.
    pub width: usize,

    /// Sum of the original values over the covered positions.
    pub sum: T,

    /// Fitted value for every covered position. Only meaningful once sealed.
    pub mean: T,
}

impl<T: Float> PooledSegment<T> {
    /// Create a sealed segment covering a single position.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self {
            width: 1,
            sum: value,
            mean: value,
        }
    }

    /// Whether this candidate, sitting immediately left of `right`, would
    /// violate the non-decreasing order and therefore has to absorb it.
    ///
    /// Equal means are pooled too, so sealed neighbours have strictly
    /// increasing means, except where pooling two equal finite means would
    /// overflow the running sum. Those stay apart; their fitted values are
    /// already equal.
    #[inline]
    pub fn must_absorb(&self, right: &Self) -> bool {
        let right_total = right.mean * width_as::<T>(self.width);
        if right_total < self.sum {
            return true;
        }
        right_total == self.sum
            && ((self.sum + right.sum).is_finite()
                || !self.sum.is_finite()
                || !right.sum.is_finite())
    }

    /// Merge `other` into this segment.
    #[inline]
    pub fn absorb(&mut self, other: &Self) {
        self.width += other.width;
        self.sum = self.sum + other.sum;
    }

    /// Finalise the mean after the last merge.
    #[inline]
    pub fn seal(&mut self) {
        self.mean = self.sum / width_as::<T>(self.width);
    }
}

/// Convert a segment width to the working float type.
#[inline]
pub fn width_as<T: Float>(width: usize) -> T {
    // Every usize is representable (possibly rounded) in f32 and f64.
    T::from(width).unwrap_or_else(T::max_value)
}
