//! Criterion micro-benchmarks for string transforms and hashing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nativeops_bench::{ascii_text, c_text};
use nativeops_core::hash::fnv1a;
use nativeops_core::text::{reverse_into, reverse_in_place, uppercase_into};

const TEXT_LEN: usize = 64 * 1024;

/// Benchmark: buffer-checked reverse and uppercase of 64 KiB.
fn bench_buffer_checked(c: &mut Criterion) {
    let input = c_text(TEXT_LEN);
    let mut output = vec![0u8; TEXT_LEN + 1];

    let mut group = c.benchmark_group("buffer_checked");
    group.throughput(Throughput::Bytes(TEXT_LEN as u64));
    group.bench_function("reverse_into_64k", |b| {
        b.iter(|| black_box(reverse_into(black_box(&input), &mut output).ok()));
    });
    group.bench_function("uppercase_into_64k", |b| {
        b.iter(|| black_box(uppercase_into(black_box(&input), &mut output).ok()));
    });
    group.finish();
}

/// Benchmark: in-place reverse of 64 KiB.
fn bench_in_place(c: &mut Criterion) {
    let mut buf = ascii_text(TEXT_LEN);

    let mut group = c.benchmark_group("in_place");
    group.throughput(Throughput::Bytes(TEXT_LEN as u64));
    group.bench_function("reverse_in_place_64k", |b| {
        b.iter(|| {
            reverse_in_place(&mut buf);
            black_box(&buf);
        });
    });
    group.finish();
}

/// Benchmark: FNV-1a over 64 KiB.
fn bench_fnv1a_64k(c: &mut Criterion) {
    let input = ascii_text(TEXT_LEN);

    let mut group = c.benchmark_group("hash");
    group.throughput(Throughput::Bytes(TEXT_LEN as u64));
    group.bench_function("fnv1a_64k", |b| {
        b.iter(|| black_box(fnv1a(black_box(&input))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_buffer_checked,
    bench_in_place,
    bench_fnv1a_64k
);
criterion_main!(benches);
