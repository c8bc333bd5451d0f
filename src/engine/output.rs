//! Result type for isotonic projection.
//!
//! ## Purpose
//!
//! This module defines `IsotonicResult`, the value returned by a fitted
//! model, and its human-readable formatting.
//!
//! ## Design notes
//!
//! * Optional outputs are `Option` fields, present only when requested.
//! * `Display` prints a summary followed by a per-position table.
//!
//! ## Invariants
//!
//! * `values` and `fitted` have the same length.
//! * When present, `residuals` has that length too and blocks tile it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pava::Block;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::order::{Direction, is_monotone};

/// Output of an isotonic projection.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotonicResult<T> {
    /// The input values, in input order.
    pub values: Vec<T>,

    /// The projected values, in input order.
    pub fitted: Vec<T>,

    /// Direction the projection enforced.
    pub direction: Direction,

    /// Pooled blocks, left to right (if requested).
    pub blocks: Option<Vec<Block<T>>>,

    /// `values[i] - fitted[i]` (if requested).
    pub residuals: Option<Vec<T>>,

    /// Fit quality metrics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> IsotonicResult<T> {
    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.fitted.len()
    }

    /// Whether the projection was run on an empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fitted.is_empty()
    }

    /// Whether the input already satisfied the constraint.
    pub fn input_was_monotone(&self) -> bool {
        is_monotone(&self.values, self.direction)
    }

    /// Consume the result, keeping only the fitted values.
    pub fn into_fitted(self) -> Vec<T> {
        self.fitted
    }
}

impl<T: Float + Display> Display for IsotonicResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Direction: {:?}", self.direction)?;
        if let Some(blocks) = &self.blocks {
            writeln!(f, "  Blocks: {}", blocks.len())?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "{}", diag)?;
        }

        writeln!(f)?;
        writeln!(f, "Projected Data:")?;
        if self.residuals.is_some() {
            writeln!(f, "  {:>6} {:>12} {:>12} {:>12}", "Index", "Value", "Fitted", "Residual")?;
            writeln!(f, "  {}", "-".repeat(45))?;
        } else {
            writeln!(f, "  {:>6} {:>12} {:>12}", "Index", "Value", "Fitted")?;
            writeln!(f, "  {}", "-".repeat(32))?;
        }

        for (i, (v, y)) in self.values.iter().zip(self.fitted.iter()).enumerate() {
            write!(f, "  {:>6} {:>12.5} {:>12.5}", i, v, y)?;
            if let Some(r) = self.residuals.as_ref().and_then(|r| r.get(i)) {
                write!(f, " {:>12.6}", r)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
