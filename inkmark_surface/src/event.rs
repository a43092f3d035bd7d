// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Single-pointer drawing input, in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer touched down; starts a stroke.
    Down(Point),
    /// The pointer moved while down; extends the stroke.
    Move(Point),
    /// The pointer lifted; commits the stroke as drawn so far.
    ///
    /// The lift position itself is not added to the stroke.
    Up(Point),
}

/// Multi-touch view input, as reported by a gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A two-finger scale gesture started.
    ScaleBegin,
    /// One tick of a scale gesture.
    ScaleUpdate {
        /// Ratio of the current finger span to the previous one.
        factor: f64,
        /// Midpoint between the fingers, in view coordinates.
        focus: Point,
    },
    /// The scale gesture ended.
    ScaleEnd,
    /// A single finger moved by this much since its previous position.
    ///
    /// See [`DragTracker`](crate::DragTracker) for deriving deltas from raw positions.
    Drag(Vec2),
}

/// User-invoked editing commands, typically bound to on-screen buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Remove the most recent stroke.
    Undo,
    /// Restore the most recently removed stroke.
    Redo,
    /// Discard every stroke, including undone ones.
    Reset,
}
