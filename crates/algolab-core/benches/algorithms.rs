//! Criterion benchmarks for the algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use algolab_core::count::count_in_range;
use algolab_core::prime::is_prime;
use algolab_core::quicksort::quick_sort;

fn pseudo_random(len: usize) -> Vec<f64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000_000) as f64
        })
        .collect()
}

fn bench_quick_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("QuickSort");
    for &len in &[100usize, 1_000, 10_000, 100_000] {
        let data = pseudo_random(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| quick_sort(data));
        });
    }
    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("IsPrime");
    for &n in &[1_000_003u64, 1_000_000_007, 999_999_999_989] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| is_prime(n));
        });
    }
    group.finish();
}

fn bench_count_in_range(c: &mut Criterion) {
    let data = pseudo_random(100_000);
    c.bench_function("CountInRange/100000", |b| {
        b.iter(|| count_in_range(&data, 500_000.0));
    });
}

criterion_group!(benches, bench_quick_sort, bench_is_prime, bench_count_in_range);
criterion_main!(benches);
