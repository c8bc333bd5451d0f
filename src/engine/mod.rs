//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a projection: it screens the input, runs the
//! pooling pass, and assembles the optional outputs into a result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Projection orchestration.
pub mod executor;

/// Result type and formatting.
pub mod output;

/// Input screening.
pub mod validator;
