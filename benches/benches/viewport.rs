// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inkmark_viewport::{ViewportTransform, ZoomLimits};
use kurbo::{Point, Vec2};

fn bench_pinch_sequence(c: &mut Criterion) {
    // Alternating pinch out/in ticks with a wandering focus; a fraction of
    // them land outside the limits and get rejected.
    let ticks: Vec<(f64, Point)> = (0..1_000_u32)
        .map(|i| {
            let factor = if i % 7 < 4 { 1.08 } else { 0.93 };
            let t = f64::from(i);
            (factor, Point::new(200.0 + t.sin() * 80.0, 300.0 + t.cos() * 60.0))
        })
        .collect();

    c.bench_function("viewport/pinch_1000_ticks", |b| {
        b.iter(|| {
            let mut view = ViewportTransform::new(ZoomLimits::new(1.0, 5.0));
            view.on_scale_begin();
            for (factor, focus) in &ticks {
                view.on_scale_update(*factor, *focus);
                view.on_drag(Vec2::new(0.5, -0.25));
            }
            view.on_scale_end();
            black_box(view.current_matrix())
        });
    });
}

criterion_group!(benches, bench_pinch_sequence);
criterion_main!(benches);
