// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use inkmark_benches::{history_with, spiral};
use inkmark_stroke::StrokeHistory;
use kurbo::Point;

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/gesture");

    // A long stroke is one down, many moves, one up.
    for len in [64usize, 512, 4_096] {
        let points = spiral(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter_batched(
                StrokeHistory::new,
                |mut history| {
                    history.begin_stroke(points[0]);
                    for pt in &points[1..] {
                        history.extend_stroke(*pt);
                    }
                    history.commit_stroke();
                    black_box(history);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/undo_redo");

    // Undo everything, then redo everything: strokes move, they are never copied.
    for strokes in [16usize, 256, 2_048] {
        let points = spiral(128);
        group.throughput(Throughput::Elements(strokes as u64 * 2));

        group.bench_with_input(BenchmarkId::from_parameter(strokes), &strokes, |b, &n| {
            b.iter_batched(
                || history_with(n, &points),
                |mut history| {
                    while history.can_undo() {
                        history.undo();
                    }
                    while history.can_redo() {
                        history.redo();
                    }
                    black_box(history);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_render_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/render_list");

    for strokes in [16usize, 256, 2_048] {
        let mut history = history_with(strokes, &spiral(32));
        history.begin_stroke(Point::ZERO);
        group.throughput(Throughput::Elements(strokes as u64 + 1));

        group.bench_with_input(BenchmarkId::from_parameter(strokes), &history, |b, history| {
            b.iter(|| {
                let total: usize = history.render_list().map(|s| s.len()).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gesture,
    bench_undo_redo_cycle,
    bench_render_list
);
criterion_main!(benches);
