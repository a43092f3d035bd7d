// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};

use crate::StrokeStyle;

/// One continuous freehand gesture: an ordered run of points plus its style.
///
/// Points are in view-local coordinates and can only be appended, and only by
/// the [`StrokeHistory`](crate::StrokeHistory) that owns the stroke while it is
/// in progress. Once committed, a stroke is never modified again.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    pub(crate) fn start(point: Point, style: StrokeStyle) -> Self {
        let mut points = Vec::with_capacity(16);
        points.push(point);
        Self { points, style }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the stroke's points in the order they were drawn.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the style the stroke was created with.
    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the stroke has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point the gesture started at.
    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the most recently appended point.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns the bounding box of the stroke's centerline.
    ///
    /// The stroke width is not included; inflate by half of
    /// [`StrokeStyle::width`] to get the painted extent.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        let mut rect = Rect::from_points(*first, *first);
        for pt in rest {
            rect = rect.union_pt(*pt);
        }
        Some(rect)
    }

    /// Builds a polyline path through the stroke's points.
    ///
    /// A single-point stroke yields a lone `MoveTo`, which renderers draw as
    /// nothing (matching a tap that never moved).
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for pt in points {
                path.line_to(*pt);
            }
        }
        path
    }
}
