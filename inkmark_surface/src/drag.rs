// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Turns raw positions of one moving finger into per-event deltas.
///
/// Feed every position through [`track`](Self::track) and pass the returned
/// delta on as a [`GestureEvent::Drag`](crate::GestureEvent::Drag). Call
/// [`release`](Self::release) when the finger lifts so the next touch does not
/// jump by the distance between the two gestures.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    last: Option<Point>,
}

impl DragTracker {
    /// Creates a tracker with no previous position.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records `position` and returns how far it is from the previous one.
    ///
    /// Returns `None` for the first position after creation or a release.
    pub fn track(&mut self, position: Point) -> Option<Vec2> {
        let delta = self.last.map(|last| position - last);
        self.last = Some(position);
        delta
    }

    /// Forgets the previous position.
    pub fn release(&mut self) {
        self.last = None;
    }

    /// Returns the most recently tracked position.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last
    }
}
