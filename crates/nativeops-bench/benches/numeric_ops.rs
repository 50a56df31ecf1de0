//! Criterion micro-benchmarks for the numeric routines.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nativeops_core::numeric::{factorial, fibonacci, gcd, sqrt};

/// Benchmark: factorial across its whole valid domain.
fn bench_factorial_domain(c: &mut Criterion) {
    c.bench_function("factorial_0_to_20", |b| {
        b.iter(|| {
            for n in 0..=20u32 {
                black_box(factorial(black_box(n)).ok());
            }
        });
    });
}

/// Benchmark: the largest Fibonacci number that fits `i64`.
fn bench_fibonacci_92(c: &mut Criterion) {
    c.bench_function("fibonacci_92", |b| {
        b.iter(|| black_box(fibonacci(black_box(92)).ok()));
    });
}

/// Benchmark: gcd of consecutive Fibonacci numbers, the Euclidean worst case.
fn bench_gcd_worst_case(c: &mut Criterion) {
    let (a, bv) = (7_540_113_804_746_346_429i64, 4_660_046_610_375_530_309i64);
    c.bench_function("gcd_fibonacci_pair", |b| {
        b.iter(|| black_box(gcd(black_box(a), black_box(bv))));
    });
}

/// Benchmark: Newton square root over 1000 magnitudes.
fn bench_sqrt_sweep(c: &mut Criterion) {
    let inputs: Vec<f64> = (1..=1000).map(|i| f64::from(i) * 1.7e3).collect();
    c.bench_function("sqrt_sweep_1k", |b| {
        b.iter(|| {
            for &x in &inputs {
                black_box(sqrt(x).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_factorial_domain,
    bench_fibonacci_92,
    bench_gcd_worst_case,
    bench_sqrt_sweep
);
criterion_main!(benches);
