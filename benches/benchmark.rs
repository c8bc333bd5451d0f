//! Isotonic projection benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M points)
//! - Pooling pressure (monotone, reversed, noisy trend)
//! - Direction and result options
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use isotonic_rs::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Increasing trend with Gaussian noise.
fn generate_noisy_trend(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 5.0).unwrap();

    (0..size)
        .map(|i| i as f64 * 0.01 + noise_dist.sample(&mut rng))
        .collect()
}

/// Noisy sorted degree sequence, as produced by a Laplace-style release.
fn generate_degree_sequence(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 3.0).unwrap();

    let mut degrees: Vec<f64> = (0..size)
        .map(|_| (rng.random::<f64>().powi(3) * 200.0).floor())
        .collect();
    degrees.sort_by(|a, b| a.partial_cmp(b).unwrap());
    degrees
        .into_iter()
        .map(|d| d + noise_dist.sample(&mut rng))
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let values = generate_noisy_trend(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, v| {
            b.iter(|| project(black_box(v)).unwrap())
        });
    }

    group.finish();
}

fn bench_pooling_pressure(c: &mut Criterion) {
    let mut group = c.benchmark_group("pooling_pressure");
    let size = 100_000;

    let monotone: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let reversed: Vec<f64> = monotone.iter().rev().copied().collect();
    let degrees = generate_degree_sequence(size, 7);

    for (name, values) in [
        ("monotone", &monotone),
        ("reversed", &reversed),
        ("degree_sequence", &degrees),
    ] {
        group.bench_with_input(BenchmarkId::new("project", name), values, |b, v| {
            b.iter(|| project(black_box(v)).unwrap())
        });
    }

    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let values = generate_noisy_trend(100_000, 11);

    let plain = Isotonic::new().build().unwrap();
    let full = Isotonic::new()
        .return_blocks()
        .return_residuals()
        .return_diagnostics()
        .build()
        .unwrap();

    group.bench_function("increasing", |b| {
        b.iter(|| plain.fit(black_box(&values)).unwrap())
    });
    group.bench_function("decreasing", |b| {
        b.iter(|| project_decreasing(black_box(&values)).unwrap())
    });
    group.bench_function("all_outputs", |b| {
        b.iter(|| full.fit(black_box(&values)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_pooling_pressure, bench_options);
criterion_main!(benches);
