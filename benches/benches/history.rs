// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use thicket_history::{History, HistoryOptions};
use thicket_value::{Path, Value, ValueMap};

/// A form with `fields` scalar entries.
fn seeded_history(fields: usize) -> History {
    let defaults: ValueMap = (0..fields)
        .map(|i| (format!("field{i}"), Value::from(i as i64)))
        .collect();
    History::new(HistoryOptions {
        defaults: Some(defaults),
        ..HistoryOptions::default()
    })
}

fn bench_change_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/set");

    // Every mutation clones the whole form into the snapshot window, so the
    // cost of a change scales with form size. This tracks that cost across
    // plausible form widths.
    for fields in [4_usize, 16, 64] {
        let path = Path::parse("field0");
        group.throughput(Throughput::Elements(fields as u64));
        group.bench_with_input(
            BenchmarkId::new("snapshot_and_set", fields),
            &fields,
            |b, &fields| {
                b.iter_batched(
                    || seeded_history(fields),
                    |mut history| {
                        for i in 0..50_i64 {
                            history.set(&path, Value::from(i));
                        }
                        black_box(history);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_undo_redo_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/walk");

    group.bench_function("undo_redo_full_window", |b| {
        let path = Path::parse("field0");
        b.iter_batched(
            || {
                let mut history = seeded_history(16);
                for i in 0..49_i64 {
                    history.set(&path, Value::from(i));
                }
                history
            },
            |mut history| {
                while history.undo() {}
                while history.redo() {}
                black_box(history);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_change_churn, bench_undo_redo_walk);
criterion_main!(benches);
