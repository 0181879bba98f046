// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_windowed_list::{
    KeyedVec, WindowConfig, WindowManager, compute_positioning, compute_visible_window,
};

type Rows = KeyedVec<u64, fn(&u64) -> u64>;

fn row_key(id: &u64) -> u64 {
    *id
}

fn rows(len: usize) -> Rows {
    Rows::new((0..len as u64).collect(), row_key)
}

fn bench_compute_visible_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed_list/compute_visible_window");

    // Hypothesis: cost is constant in `len`; only the arithmetic runs.
    for len in [1_000usize, 100_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut offset = 0.0_f64;
            b.iter(|| {
                offset = (offset + 37.0) % (len as f64 * 24.0);
                let window = compute_visible_window(black_box(offset), 720.0, 24.0, len, 2);
                black_box(compute_positioning(window, 24.0, len))
            });
        });
    }

    group.finish();
}

fn bench_on_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed_list/on_scroll");

    // Each step moves by less than a row most of the time, so many events are
    // no-ops; the rest realize one or two new keys.
    for len in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let config = WindowConfig::new(24.0, 720.0).with_overscan(2);
            let mut list = WindowManager::new(rows(len), config).unwrap();
            let max = list.max_scroll_offset();
            let mut offset = 0.0_f64;
            b.iter(|| {
                offset = (offset + 13.0) % max;
                black_box(list.on_scroll(black_box(offset)))
            });
        });
    }

    group.finish();
}

fn bench_jump_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed_list/jump_scroll");

    // Every event lands on a disjoint window: the full slice churns.
    for overscan in [0usize, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(overscan),
            &overscan,
            |b, &overscan| {
                let config = WindowConfig::new(24.0, 720.0).with_overscan(overscan);
                let mut list = WindowManager::new(rows(1_000_000), config).unwrap();
                let mut offset = 0.0_f64;
                b.iter(|| {
                    offset = (offset + 100_000.0) % 20_000_000.0;
                    black_box(list.on_scroll(offset))
                });
            },
        );
    }

    group.finish();
}

fn bench_collection_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowed_list/on_collection_changed");

    for len in [1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut list = WindowManager::new(rows(len), WindowConfig::new(24.0, 720.0)).unwrap();
            let _ = list.on_scroll(12_000.0);
            b.iter_batched(
                || rows(len / 2),
                |next| black_box(list.on_collection_changed(next)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_visible_window,
    bench_on_scroll,
    bench_jump_scroll,
    bench_collection_changed
);
criterion_main!(benches);
