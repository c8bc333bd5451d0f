//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the Pool-Adjacent-Violators algorithm: the backward
//! pooling pass over the input and the expansion of pooled segments back into
//! per-position fitted values.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pool-Adjacent-Violators pooling and expansion.
pub mod pava;
