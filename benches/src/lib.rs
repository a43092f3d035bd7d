// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared inputs for the Inkmark criterion benchmarks in `benches/`.

use inkmark_stroke::StrokeHistory;
use kurbo::Point;

/// Returns `len` points along an outward spiral, like a scribbled circle.
pub fn spiral(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(t.cos() * t * 4.0, t.sin() * t * 4.0)
        })
        .collect()
}

/// Builds a history of `strokes` committed copies of the gesture through `points`.
pub fn history_with(strokes: usize, points: &[Point]) -> StrokeHistory {
    let mut history = StrokeHistory::new();
    let Some((first, rest)) = points.split_first() else {
        return history;
    };
    for _ in 0..strokes {
        history.begin_stroke(*first);
        for pt in rest {
            history.extend_stroke(*pt);
        }
        history.commit_stroke();
    }
    history
}
