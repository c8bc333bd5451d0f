#![cfg(feature = "dev")]
//! Tests for the Pool-Adjacent-Violators pass.
//!
//! These tests verify:
//! - Known projections (reference scenarios)
//! - Segment stack layout after pooling
//! - Block extraction and expansion order
//! - Decreasing direction
//!
//! ## Test Organization
//!
//! 1. **Reference Scenarios** - Exact expected outputs
//! 2. **Pooling** - Stack contents and invariants
//! 3. **Blocks** - Left-to-right block layout
//! 4. **Direction** - Antitonic projection

use approx::assert_abs_diff_eq;

use isotonic_rs::internals::algorithms::pava::{
    Block, expand_segments, pool_adjacent_violators, pool_segments, segments_to_blocks,
};
use isotonic_rs::internals::math::order::{Direction, is_monotone};
use isotonic_rs::internals::primitives::segment::PooledSegment;

fn assert_slices_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-9);
    }
}

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_pava_pools_interior_violators() {
    let fitted = pool_adjacent_violators(&[1.0, 9.0, 4.0, 3.0, 4.0], Direction::Increasing);
    assert_slices_close(&fitted, &[1.0, 5.0, 5.0, 5.0, 5.0]);
}

#[test]
fn test_pava_keeps_monotone_input() {
    let fitted = pool_adjacent_violators(&[1.0, 2.0, 3.0, 4.0, 5.0], Direction::Increasing);
    assert_slices_close(&fitted, &[1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_pava_reversed_input_pools_to_global_mean() {
    let fitted = pool_adjacent_violators(&[5.0, 4.0, 3.0, 2.0, 1.0], Direction::Increasing);
    assert_slices_close(&fitted, &[3.0; 5]);
}

#[test]
fn test_pava_empty_and_single() {
    let empty: Vec<f64> = pool_adjacent_violators(&[], Direction::Increasing);
    assert!(empty.is_empty());

    let single = pool_adjacent_violators(&[7.0], Direction::Increasing);
    assert_eq!(single, vec![7.0]);
}

#[test]
fn test_pava_ties_are_preserved() {
    let fitted = pool_adjacent_violators(&[2.0, 2.0, 2.0], Direction::Increasing);
    assert_slices_close(&fitted, &[2.0, 2.0, 2.0]);
}

#[test]
fn test_pava_f32() {
    let fitted = pool_adjacent_violators(&[1.0_f32, 3.0, 2.0], Direction::Increasing);
    assert_eq!(fitted, vec![1.0_f32, 2.5, 2.5]);
}

// ============================================================================
// Pooling
// ============================================================================

#[test]
fn test_pool_segments_stack_top_is_leftmost() {
    let mut stack = Vec::new();
    pool_segments(&[1.0, 9.0, 4.0, 3.0, 4.0], Direction::Increasing, &mut stack);

    assert_eq!(stack.len(), 2);
    // Bottom: positions 1..5
    assert_eq!(stack[0].width, 4);
    assert_abs_diff_eq!(stack[0].sum, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stack[0].mean, 5.0, epsilon = 1e-12);
    // Top: position 0
    assert_eq!(stack[1].width, 1);
    assert_abs_diff_eq!(stack[1].mean, 1.0, epsilon = 1e-12);
}

#[test]
fn test_pool_segments_means_strictly_increasing() {
    let values = [4.0, 1.0, 1.0, 3.0, 2.0, 8.0, 8.0, 0.5, 9.0];
    let mut stack = Vec::new();
    pool_segments(&values, Direction::Increasing, &mut stack);

    // Position order is stack order reversed.
    let means: Vec<f64> = stack.iter().rev().map(|s| s.mean).collect();
    for w in means.windows(2) {
        assert!(w[0] < w[1], "means not strictly increasing: {:?}", means);
    }

    let total: usize = stack.iter().map(|s| s.width).sum();
    assert_eq!(total, values.len());
}

#[test]
fn test_pool_segments_clears_reused_stack() {
    let mut stack = vec![PooledSegment::singleton(100.0); 3];
    pool_segments(&[1.0, 2.0], Direction::Increasing, &mut stack);
    assert_eq!(stack.len(), 2);

    pool_segments::<f64>(&[], Direction::Increasing, &mut stack);
    assert!(stack.is_empty());
}

#[test]
fn test_expand_segments_appends_in_position_order() {
    let mut stack = Vec::new();
    pool_segments(&[0.0, 6.0, 2.0, 10.0], Direction::Increasing, &mut stack);

    let mut out = vec![-1.0];
    expand_segments(&stack, Direction::Increasing, &mut out);
    assert_slices_close(&out, &[-1.0, 0.0, 4.0, 4.0, 10.0]);
}

#[test]
fn test_long_violating_run_is_iterative() {
    let values: Vec<f64> = (0..200_000).rev().map(|i| i as f64).collect();
    let fitted = pool_adjacent_violators(&values, Direction::Increasing);

    let mean = 199_999.0 / 2.0;
    assert_abs_diff_eq!(fitted[0], mean, epsilon = 1e-6);
    assert_abs_diff_eq!(fitted[fitted.len() - 1], mean, epsilon = 1e-6);
}

// ============================================================================
// Blocks
// ============================================================================

#[test]
fn test_blocks_tile_output() {
    let mut stack = Vec::new();
    pool_segments(&[3.0, 1.0, 2.0, 6.0, 4.0, 5.0], Direction::Increasing, &mut stack);
    let blocks = segments_to_blocks(&stack, Direction::Increasing);

    assert_eq!(
        blocks,
        vec![
            Block {
                start: 0,
                len: 3,
                value: 2.0
            },
            Block {
                start: 3,
                len: 3,
                value: 5.0
            },
        ]
    );
    assert_eq!(blocks[1].end(), 6);
}

#[test]
fn test_blocks_empty_input() {
    let stack: Vec<PooledSegment<f64>> = Vec::new();
    assert!(segments_to_blocks(&stack, Direction::Increasing).is_empty());
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_decreasing_projection() {
    let fitted = pool_adjacent_violators(&[1.0, 2.0, 3.0, 4.0, 5.0], Direction::Decreasing);
    assert_slices_close(&fitted, &[3.0; 5]);

    let fitted = pool_adjacent_violators(&[4.0, 3.0, 9.0, 1.0], Direction::Decreasing);
    assert_slices_close(&fitted, &[5.333333333333333, 5.333333333333333, 5.333333333333333, 1.0]);
    assert!(is_monotone(&fitted, Direction::Decreasing));
}

#[test]
fn test_decreasing_blocks_carry_original_sign() {
    let mut stack = Vec::new();
    pool_segments(&[1.0, 3.0, 0.0], Direction::Decreasing, &mut stack);
    let blocks = segments_to_blocks(&stack, Direction::Decreasing);

    assert_eq!(blocks.len(), 2);
    assert_abs_diff_eq!(blocks[0].value, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(blocks[1].value, 0.0, epsilon = 1e-12);
}
