// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use thicket_drag::{ElementId, RectRegistry};

/// A grid of 10x10 rects on a 12px pitch, `len` of them, 32 per row.
fn grid_registry(len: usize) -> RectRegistry {
    let mut registry = RectRegistry::new();
    for i in 0..len {
        let x = (i % 32) as f64 * 12.0;
        let y = (i / 32) as f64 * 12.0;
        registry.insert(
            ElementId::from(format!("card{i}")),
            Rect::new(x, y, x + 10.0, y + 10.0),
        );
    }
    registry
}

fn bench_hit_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/hit_scan");

    // Both scans are linear in registration order; this tracks the constant
    // factor as the element count grows past what a drag surface usually has.
    for len in [16_usize, 64, 256, 1024] {
        let registry = grid_registry(len);
        let probe = Point::new(101.0, 53.0);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hit_first", len), &registry, |b, reg| {
            b.iter(|| black_box(reg.hit_first(black_box(probe))));
        });

        group.bench_with_input(
            BenchmarkId::new("hits_excluding", len),
            &registry,
            |b, reg| {
                let skip = ElementId::from("card0");
                b.iter(|| black_box(reg.hits_excluding(black_box(probe), &skip)));
            },
        );
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/insert");

    for len in [64_usize, 1024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("grid", len), &len, |b, &len| {
            b.iter(|| black_box(grid_registry(len)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_scans, bench_rebuild);
criterion_main!(benches);
