//! High-level API for isotonic projection.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder that
//! produces an immutable model, and free functions for the common cases.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder misuse is reported by `.build()`.
//! * **Type-Safe**: Fitting is generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`IsotonicBuilder`] via `Isotonic::new()`.
//! 2. Chain configuration methods (`.direction()`, `.return_blocks()`, etc.).
//! 3. Call `.build()` to get an [`IsotonicModel`], then `.fit(&values)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::algorithms::pava::pool_adjacent_violators;
use crate::engine::executor::{IsotonicConfig, IsotonicExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::pava::Block;
pub use crate::engine::output::IsotonicResult;
pub use crate::engine::validator::NonFinitePolicy;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::order::Direction;
pub use crate::primitives::errors::IsotonicError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an isotonic projection.
#[derive(Debug, Clone, Default)]
pub struct IsotonicBuilder {
    /// Direction of the constraint (default: Increasing).
    pub direction: Option<Direction>,

    /// Handling of NaN and infinite inputs (default: Reject).
    pub non_finite_policy: Option<NonFinitePolicy>,

    /// Report pooled blocks.
    pub return_blocks: Option<bool>,

    /// Report residuals.
    pub return_residuals: Option<bool>,

    /// Compute fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl IsotonicBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            direction: None,
            non_finite_policy: None,
            return_blocks: None,
            return_residuals: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the direction of the monotonicity constraint.
    pub fn direction(mut self, direction: Direction) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Set the policy for NaN and infinite inputs.
    pub fn non_finite_policy(mut self, policy: NonFinitePolicy) -> Self {
        if self.non_finite_policy.is_some() {
            self.duplicate_param = Some("non_finite_policy");
        }
        self.non_finite_policy = Some(policy);
        self
    }

    /// Include the pooled blocks in the result.
    pub fn return_blocks(mut self) -> Self {
        if self.return_blocks.is_some() {
            self.duplicate_param = Some("return_blocks");
        }
        self.return_blocks = Some(true);
        self
    }

    /// Include residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        if self.return_residuals.is_some() {
            self.duplicate_param = Some("return_residuals");
        }
        self.return_residuals = Some(true);
        self
    }

    /// Include fit diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<IsotonicModel, IsotonicError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(IsotonicError::DuplicateParameter { parameter });
        }

        Ok(IsotonicModel {
            config: IsotonicConfig {
                direction: self.direction.unwrap_or_default(),
                non_finite_policy: self.non_finite_policy.unwrap_or_default(),
                return_blocks: self.return_blocks.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured isotonic projection. Stateless and reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsotonicModel {
    config: IsotonicConfig,
}

impl IsotonicModel {
    /// The resolved configuration.
    pub fn config(&self) -> &IsotonicConfig {
        &self.config
    }

    /// Project `values` onto the configured monotone cone.
    pub fn fit<T: Float>(&self, values: &[T]) -> Result<IsotonicResult<T>, IsotonicError> {
        IsotonicExecutor::run_with_config(values, &self.config)
    }

    /// Promote `values` (integers included) to `f64` and project them.
    pub fn fit_numeric<V: ToPrimitive>(
        &self,
        values: &[V],
    ) -> Result<IsotonicResult<f64>, IsotonicError> {
        let promoted = Validator::promote_values(values)?;
        self.fit(&promoted)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Non-decreasing least-squares projection of `values`.
///
/// ```
/// let fitted = isotonic_rs::project(&[1.0, 9.0, 4.0, 3.0, 4.0])?;
/// assert_eq!(fitted, vec![1.0, 5.0, 5.0, 5.0, 5.0]);
/// # Ok::<(), isotonic_rs::prelude::IsotonicError>(())
/// ```
pub fn project<T: Float>(values: &[T]) -> Result<Vec<T>, IsotonicError> {
    project_with(values, Direction::Increasing)
}

/// Non-increasing least-squares projection of `values`.
pub fn project_decreasing<T: Float>(values: &[T]) -> Result<Vec<T>, IsotonicError> {
    project_with(values, Direction::Decreasing)
}

/// Non-decreasing projection of integer or other numeric values, computed in `f64`.
///
/// ```
/// let fitted = isotonic_rs::project_numeric(&[5_i64, 4, 3, 2, 1])?;
/// assert_eq!(fitted, vec![3.0; 5]);
/// # Ok::<(), isotonic_rs::prelude::IsotonicError>(())
/// ```
pub fn project_numeric<V: ToPrimitive>(values: &[V]) -> Result<Vec<f64>, IsotonicError> {
    let promoted = Validator::promote_values(values)?;
    project(&promoted)
}

fn project_with<T: Float>(values: &[T], direction: Direction) -> Result<Vec<T>, IsotonicError> {
    Validator::validate_values(values, NonFinitePolicy::Reject)?;
    Ok(pool_adjacent_violators(values, direction))
}
