//! Fit quality diagnostics for isotonic projections.
//!
//! ## Purpose
//!
//! This module computes summary statistics describing how much a projection
//! changed its input.
//!
//! ## Design notes
//!
//! * **Residual-based**: Every metric derives from `observed - fitted`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **SSE**: The objective the projection minimises.
//! * **Violations**: Adjacent input pairs that break the requested order.
//!   Zero violations means the projection returned its input unchanged.
//!
//! ## Invariants
//!
//! * All metrics are zero for an empty input.
//! * `rmse`, `mae` and `max_adjustment` are non-negative for finite input.
//!
//! ## Non-goals
//!
//! * Information criteria or intervals; the projection has no smoothing
//!   parameter to select.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::math::order::{Direction, count_violations};
use crate::math::squares::sum_squared_error;
use crate::primitives::segment::width_as;

// ============================================================================
// Diagnostics
// ============================================================================

/// Summary statistics of a projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Sum of squared residuals.
    pub sse: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Mean absolute residual.
    pub mae: T,

    /// Largest absolute change applied to a single position.
    pub max_adjustment: T,

    /// Number of pooled blocks in the fitted sequence.
    pub n_blocks: usize,

    /// Adjacent input pairs that violate the requested direction.
    pub n_violations: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from the input, the fitted values and the number
    /// of pooled blocks.
    pub fn compute(observed: &[T], fitted: &[T], n_blocks: usize, direction: Direction) -> Self {
        let n = observed.len().min(fitted.len());
        if n == 0 {
            return Self {
                sse: T::zero(),
                rmse: T::zero(),
                mae: T::zero(),
                max_adjustment: T::zero(),
                n_blocks: 0,
                n_violations: 0,
            };
        }

        let sse = sum_squared_error(observed, fitted);
        let mut abs_sum = T::zero();
        let mut max_adjustment = T::zero();
        for (&o, &f) in observed.iter().zip(fitted.iter()) {
            let r = (o - f).abs();
            abs_sum = abs_sum + r;
            max_adjustment = max_adjustment.max(r);
        }

        let n_t = width_as::<T>(n);
        Self {
            sse,
            rmse: (sse / n_t).sqrt(),
            mae: abs_sum / n_t,
            max_adjustment,
            n_blocks,
            n_violations: count_violations(observed, direction),
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Isotonic Diagnostics:")?;
        writeln!(f, "  SSE:            {:.6}", self.sse)?;
        writeln!(f, "  RMSE:           {:.6}", self.rmse)?;
        writeln!(f, "  MAE:            {:.6}", self.mae)?;
        writeln!(f, "  Max adjustment: {:.6}", self.max_adjustment)?;
        writeln!(f, "  Blocks:         {}", self.n_blocks)?;
        write!(f, "  Violations:     {}", self.n_violations)
    }
}
