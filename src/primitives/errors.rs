//! Error types for isotonic projection.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **Flat**: One enum, no nesting, no boxed sources.
//! * **Descriptive**: Messages name the offending value or parameter.
//! * **no_std**: `Display` comes from `core`; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * The projection itself is total over finite input; every variant stems
//!   from input screening or builder misuse.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery or partial results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur while configuring or running an isotonic projection.
#[derive(Debug, Clone, PartialEq)]
pub enum IsotonicError {
    /// A value is NaN or infinite and the active policy rejects it.
    InvalidNumericValue(String),

    /// A value could not be converted to the working float type.
    InvalidInput(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for IsotonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsotonicError::InvalidNumericValue(msg) => {
                write!(f, "Invalid numeric value: {}", msg)
            }
            IsotonicError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            IsotonicError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IsotonicError {}
