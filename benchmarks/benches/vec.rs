// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use silo::SiloVec;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs SiloVec
// =============================================================================

fn bench_push_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_from_empty");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("SiloVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = SiloVec::new();
                for i in 0..s {
                    vec.push(i as u32).unwrap();
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_preallocated");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("SiloVec", size), &size, |b, &s| {
            let mut vec = SiloVec::with_capacity(s).unwrap();
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u32).unwrap();
                }
                black_box(&vec);
            });
        });
    }

    group.finish();
}

fn bench_resize_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_fill");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                vec.resize(s, 0u8);
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("SiloVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = SiloVec::new();
                vec.resize(s, &0u8).unwrap();
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_shrink_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink_to_fit");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SiloVec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = SiloVec::with_capacity(s * 4).unwrap();
                    for i in 0..s {
                        vec.push(i as u32).unwrap();
                    }
                    vec
                },
                |mut vec| {
                    vec.shrink_to_fit().unwrap();
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    vec_benches,
    bench_push_from_empty,
    bench_push_preallocated,
    bench_resize_fill,
    bench_shrink_to_fit
);

criterion_main!(vec_benches);
