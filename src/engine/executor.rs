//! Execution engine for isotonic projection.
//!
//! ## Purpose
//!
//! This module runs one projection end to end: screening, the pooling pass,
//! expansion, and assembly of the optional blocks, residuals and diagnostics.
//!
//! ## Design notes
//!
//! * The pooling stack is allocated once per call and shared by expansion and
//!   block extraction.
//! * Optional outputs are computed only when requested.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The fitted sequence has the input's length.
//! * Block lengths sum to the input length.
//! * No state survives between calls.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pava::{expand_segments, pool_segments, segments_to_blocks};
use crate::engine::output::IsotonicResult;
use crate::engine::validator::{NonFinitePolicy, Validator};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::order::Direction;
use crate::math::squares;
use crate::primitives::errors::IsotonicError;
use crate::primitives::segment::PooledSegment;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsotonicConfig {
    /// Direction of the monotonicity constraint.
    pub direction: Direction,

    /// Handling of NaN and infinite inputs.
    pub non_finite_policy: NonFinitePolicy,

    /// Whether to report the pooled blocks.
    pub return_blocks: bool,

    /// Whether to report residuals.
    pub return_residuals: bool,

    /// Whether to compute diagnostics.
    pub return_diagnostics: bool,
}

/// Raw output of the pooling pass.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Fitted values in input order.
    pub fitted: Vec<T>,

    /// Final pooled segments; the last element is the left-most segment.
    pub segments: Vec<PooledSegment<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs isotonic projections.
pub struct IsotonicExecutor;

impl IsotonicExecutor {
    /// Pool and expand `values` without screening them.
    pub fn run<T: Float>(values: &[T], direction: Direction) -> ExecutorOutput<T> {
        let mut segments = Vec::with_capacity(values.len());
        pool_segments(values, direction, &mut segments);

        let mut fitted = Vec::with_capacity(values.len());
        expand_segments(&segments, direction, &mut fitted);

        ExecutorOutput { fitted, segments }
    }

    /// Screen `values`, project them and assemble the requested outputs.
    pub fn run_with_config<T: Float>(
        values: &[T],
        config: &IsotonicConfig,
    ) -> Result<IsotonicResult<T>, IsotonicError> {
        Validator::validate_values(values, config.non_finite_policy)?;

        let ExecutorOutput { fitted, segments } = Self::run(values, config.direction);

        let blocks = config
            .return_blocks
            .then(|| segments_to_blocks(&segments, config.direction));

        let residuals = config
            .return_residuals
            .then(|| squares::residuals(values, &fitted));

        let diagnostics = config.return_diagnostics.then(|| {
            Diagnostics::compute(values, &fitted, segments.len(), config.direction)
        });

        Ok(IsotonicResult {
            values: values.to_vec(),
            fitted,
            direction: config.direction,
            blocks,
            residuals,
            diagnostics,
        })
    }
}
