//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical helpers used throughout the crate:
//! - Order predicates (monotonicity checks and violation counts)
//! - Squared-error and residual computations
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Monotone direction and order predicates.
pub mod order;

/// Squared-error and residual helpers.
pub mod squares;
