//! # Isotonic — Pool-Adjacent-Violators projection for Rust
//!
//! Least-squares projection of an ordered sequence onto the monotone
//! sequences, computed in linear time with the Pool-Adjacent-Violators
//! algorithm (PAVA).
//!
//! ## What is isotonic projection?
//!
//! Given noisy observations `s̃` of a sequence known to be non-decreasing, the
//! isotonic projection is the non-decreasing sequence `s̄` minimising
//!
//! ```text
//! Σ (s̄_i - s̃_i)²
//! ```
//!
//! The minimiser is unique. It is made of runs ("blocks") of positions that
//! share one value, and that value is the arithmetic mean of the observations
//! in the run.
//!
//! **Common applications:**
//! - Restoring consistency to noisy sorted statistics, such as
//!   differentially-private degree sequences or cumulative counts
//! - Calibrating scores that must be monotone in a threshold
//! - Repairing measured curves with a known monotone shape
//!
//! **How PAVA works:**
//!
//! 1. Walk the sequence from the last position to the first
//! 2. Start a block for each position; while it is not below the block to its
//!    right, merge the two and take the pooled mean
//! 3. Expand every block into its width of copies of its mean
//!
//! Each position is merged at most once, so the whole pass is O(n).
//!
//! ## Quick Start
//!
//! ```rust
//! use isotonic_rs::prelude::*;
//!
//! let fitted = project(&[1.0, 9.0, 4.0, 3.0, 4.0])?;
//! assert_eq!(fitted, vec![1.0, 5.0, 5.0, 5.0, 5.0]);
//! # Result::<(), IsotonicError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use isotonic_rs::prelude::*;
//!
//! let y = vec![3.0, 1.0, 2.0, 6.0, 4.0, 5.0];
//!
//! let model = Isotonic::new()
//!     .direction(Increasing)        // Non-decreasing fit (default)
//!     .non_finite_policy(Reject)    // Fail on NaN / infinity (default)
//!     .return_blocks()              // Pooled runs
//!     .return_residuals()           // y - fitted
//!     .return_diagnostics()         // SSE, RMSE, MAE, ...
//!     .build()?;
//!
//! let result = model.fit(&y)?;
//! assert_eq!(result.fitted, vec![2.0, 2.0, 2.0, 5.0, 5.0, 5.0]);
//! println!("{}", result);
//! # Result::<(), IsotonicError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The projection is total over finite input: empty input yields an empty
//! result. Errors come from input screening and builder misuse:
//!
//! - **`InvalidNumericValue`**: a NaN or infinity under `NonFinitePolicy::Reject`.
//! - **`InvalidInput`**: a value that cannot be promoted to `f64`.
//! - **`DuplicateParameter`**: a builder option set twice.
//!
//! Sums are accumulated in the caller's float type. Runs of equal values are
//! never pooled past the type's range, so `[1e308, 1e308]` projects to
//! itself. A pool that genuinely has to average values near the range limit
//! (e.g. `[1.7e308, 1.0e308]` in `f64`) can still overflow to infinity;
//! scale such inputs down first, or project in `f64` instead of `f32`.
//!
//! ## Parameters
//!
//! | Parameter              | Default      | Options                     | Description                        |
//! |------------------------|--------------|-----------------------------|------------------------------------|
//! | **direction**          | `Increasing` | `Increasing`, `Decreasing`  | Monotone direction to enforce      |
//! | **non_finite_policy**  | `Reject`     | `Reject`, `Propagate`       | Treatment of NaN and infinities    |
//! | **return_blocks**      | false        | true/false                  | Include pooled blocks              |
//! | **return_residuals**   | false        | true/false                  | Include residuals                  |
//! | **return_diagnostics** | false        | true/false                  | Include SSE, RMSE, MAE, etc.       |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! isotonic-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Hay, M., Li, C., Miklau, G. & Jensen, D. (2009). "Accurate Estimation of the Degree Distribution of Private Networks"
//! - Hay, M., Rastogi, V., Miklau, G. & Suciu, D. (2010). "Boosting the Accuracy of Differentially-Private Histograms Through Consistency"
//! - Barlow, R. E. et al. (1972). "Statistical Inference under Order Restrictions"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and pooled segments.
mod primitives;

// Layer 2: Math - order predicates and squared-error helpers.
mod math;

// Layer 3: Algorithms - the Pool-Adjacent-Violators pass.
mod algorithms;

// Layer 4: Evaluation - fit diagnostics.
mod evaluation;

// Layer 5: Engine - screening, orchestration and result assembly.
mod engine;

// High-level fluent API.
mod api;

pub use api::{project, project_decreasing, project_numeric};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use isotonic_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Block, Diagnostics,
        Direction::{Decreasing, Increasing},
        IsotonicBuilder as Isotonic, IsotonicError, IsotonicModel, IsotonicResult,
        NonFinitePolicy::{Propagate, Reject},
        project, project_decreasing, project_numeric,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
