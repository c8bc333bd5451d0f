//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures used throughout the
//! crate:
//! - Error types
//! - Pooled segments (the unit of work of the Pool-Adjacent-Violators pass)
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for isotonic projection.
pub mod errors;

/// Pooled segment representation.
pub mod segment;
