//! Input screening for isotonic projection.
//!
//! ## Purpose
//!
//! This module decides what happens to NaN and infinite values before the
//! pooling pass runs, and converts foreign numeric inputs into the working
//! float type.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Screening stops at the first offending value.
//! * **Explicit policy**: Non-finite handling is chosen by `NonFinitePolicy`
//!   rather than left to whatever the arithmetic produces.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Empty input always passes.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not repair, drop or impute values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::IsotonicError;

/// Policy for NaN and infinite input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinitePolicy {
    /// Fail with `InvalidNumericValue` at the first non-finite value.
    #[default]
    Reject,

    /// Feed non-finite values through the arithmetic. The output keeps the
    /// input length, but the values of any block touched by a non-finite
    /// input are unspecified.
    Propagate,
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for projection inputs.
pub struct Validator;

impl Validator {
    /// Screen `values` according to `policy`.
    pub fn validate_values<T: Float>(
        values: &[T],
        policy: NonFinitePolicy,
    ) -> Result<(), IsotonicError> {
        if policy == NonFinitePolicy::Propagate {
            return Ok(());
        }

        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(IsotonicError::InvalidNumericValue(format!(
                "values[{}]={}",
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Convert arbitrary numeric values (integers included) to `f64`.
    pub fn promote_values<V: ToPrimitive>(values: &[V]) -> Result<Vec<f64>, IsotonicError> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.to_f64().ok_or_else(|| {
                    IsotonicError::InvalidInput(format!(
                        "values[{}] is not representable as f64",
                        i
                    ))
                })
            })
            .collect()
    }
}
