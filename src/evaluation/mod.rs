//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer summarises a finished projection: how far the fitted sequence
//! moved from the input and how much pooling was needed.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit quality diagnostics.
pub mod diagnostics;
