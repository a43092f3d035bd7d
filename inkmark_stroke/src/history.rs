// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::slice;

use kurbo::Point;

use crate::{Stroke, StrokeStyle};

/// Committed strokes, the redo buffer, and the stroke currently being drawn.
///
/// Pointer input maps onto three calls: pointer-down to
/// [`begin_stroke`](Self::begin_stroke), pointer-move to
/// [`extend_stroke`](Self::extend_stroke) and pointer-up to
/// [`commit_stroke`](Self::commit_stroke). The on-screen controls map onto
/// [`undo`](Self::undo), [`redo`](Self::redo) and [`reset`](Self::reset).
///
/// Every operation is total. Calls whose precondition does not hold (undo with
/// nothing committed, extend with no stroke in progress, ...) do nothing, since
/// such orderings are routine in live gesture streams.
///
/// A committed stroke lives in exactly one of the two stacks at a time; undo and
/// redo move it between them, they never copy it.
#[derive(Clone, Debug, Default)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    redo: Vec<Stroke>,
    current: Option<Stroke>,
    style: StrokeStyle,
    revision: u64,
}

impl StrokeHistory {
    /// Creates an empty history drawing with the default pen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history whose strokes all use `style`.
    #[must_use]
    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Returns the style given to every new stroke.
    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Starts a new stroke at `point`.
    ///
    /// A stroke already in progress is discarded without being committed, and
    /// the redo buffer is cleared even if this gesture never gets committed.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.current.is_some() {
            log::trace!("discarding uncommitted stroke");
        }
        if !self.redo.is_empty() {
            log::debug!("new stroke drops {} redo entries", self.redo.len());
            self.redo.clear();
        }
        self.current = Some(Stroke::start(point, self.style));
        self.bump_revision();
    }

    /// Appends `point` to the stroke in progress.
    ///
    /// Does nothing if no stroke is in progress.
    pub fn extend_stroke(&mut self, point: Point) {
        let Some(current) = &mut self.current else {
            log::trace!("move without a stroke in progress, ignoring {point:?}");
            return;
        };
        current.push(point);
        self.bump_revision();
    }

    /// Moves the stroke in progress onto the top of the committed history.
    ///
    /// Clears the redo buffer. Does nothing if no stroke is in progress.
    pub fn commit_stroke(&mut self) {
        let Some(stroke) = self.current.take() else {
            log::trace!("commit without a stroke in progress");
            return;
        };
        log::debug!(
            "committing stroke of {} points ({} in history)",
            stroke.len(),
            self.committed.len() + 1
        );
        self.committed.push(stroke);
        self.redo.clear();
        self.bump_revision();
    }

    /// Moves the most recently committed stroke into the redo buffer.
    ///
    /// Does nothing if nothing is committed.
    pub fn undo(&mut self) {
        let Some(stroke) = self.committed.pop() else {
            log::trace!("nothing to undo");
            return;
        };
        self.redo.push(stroke);
        self.bump_revision();
    }

    /// Moves the most recently undone stroke back onto the committed history.
    ///
    /// The stroke lands on top of the draw order, above anything committed
    /// since it was undone. Does nothing if the redo buffer is empty.
    pub fn redo(&mut self) {
        let Some(stroke) = self.redo.pop() else {
            log::trace!("nothing to redo");
            return;
        };
        self.committed.push(stroke);
        self.bump_revision();
    }

    /// Clears the committed history, the redo buffer, and the stroke in progress.
    pub fn reset(&mut self) {
        log::info!(
            "resetting drawing ({} committed, {} undone)",
            self.committed.len(),
            self.redo.len()
        );
        self.committed.clear();
        self.redo.clear();
        self.current = None;
        self.bump_revision();
    }

    /// Returns the strokes to draw this frame, bottom to top.
    ///
    /// This is the committed history followed by the stroke in progress, if any.
    #[must_use]
    pub fn render_list(&self) -> RenderList<'_> {
        RenderList {
            committed: self.committed.iter(),
            current: self.current.as_ref().filter(|s| !s.is_empty()),
        }
    }

    /// Returns the committed strokes, oldest first.
    #[must_use]
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Returns the redo buffer; the last entry is the next one [`redo`](Self::redo) restores.
    #[must_use]
    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo
    }

    /// Returns the stroke in progress, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Returns `true` if [`undo`](Self::undo) would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns `true` if [`redo`](Self::redo) would change anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the current revision counter.
    ///
    /// The counter is bumped whenever an operation changes what
    /// [`render_list`](Self::render_list) yields or what the stacks hold, and
    /// left alone by no-op calls. Callers compare it against a previously seen
    /// value to decide whether a redraw is needed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Iterator over the strokes of one frame, in draw order.
///
/// Returned by [`StrokeHistory::render_list`].
#[derive(Clone, Debug)]
pub struct RenderList<'a> {
    committed: slice::Iter<'a, Stroke>,
    current: Option<&'a Stroke>,
}

impl<'a> Iterator for RenderList<'a> {
    type Item = &'a Stroke;

    fn next(&mut self) -> Option<Self::Item> {
        self.committed.next().or_else(|| self.current.take())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.committed.len() + usize::from(self.current.is_some());
        (len, Some(len))
    }
}

impl ExactSizeIterator for RenderList<'_> {}

impl FusedIterator for RenderList<'_> {}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::StrokeHistory;

    fn pts(history: &StrokeHistory) -> alloc::vec::Vec<alloc::vec::Vec<Point>> {
        history
            .render_list()
            .map(|s| s.points().to_vec())
            .collect()
    }

    #[test]
    fn render_list_puts_current_last() {
        let mut h = StrokeHistory::new();
        h.begin_stroke(Point::new(1.0, 1.0));
        h.commit_stroke();
        h.begin_stroke(Point::new(2.0, 2.0));
        h.extend_stroke(Point::new(3.0, 3.0));

        let list = h.render_list();
        assert_eq!(list.len(), 2);
        assert_eq!(
            pts(&h),
            [
                alloc::vec![Point::new(1.0, 1.0)],
                alloc::vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)],
            ]
        );
    }

    #[test]
    fn begin_discards_uncommitted_stroke() {
        let mut h = StrokeHistory::new();
        h.begin_stroke(Point::new(0.0, 0.0));
        h.extend_stroke(Point::new(5.0, 0.0));
        h.begin_stroke(Point::new(9.0, 9.0));
        h.commit_stroke();

        assert_eq!(h.committed().len(), 1);
        assert_eq!(h.committed()[0].points(), &[Point::new(9.0, 9.0)]);
    }

    #[test]
    fn revision_ignores_no_ops() {
        let mut h = StrokeHistory::new();
        h.undo();
        h.redo();
        h.extend_stroke(Point::new(1.0, 1.0));
        h.commit_stroke();
        assert_eq!(h.revision(), 0);

        h.begin_stroke(Point::ZERO);
        h.extend_stroke(Point::new(1.0, 1.0));
        h.commit_stroke();
        assert_eq!(h.revision(), 3);
    }

    #[test]
    fn strokes_take_history_style() {
        let style = crate::StrokeStyle {
            width: 2.0,
            ..crate::StrokeStyle::default()
        };
        let mut h = StrokeHistory::with_style(style);
        h.begin_stroke(Point::ZERO);
        h.commit_stroke();
        assert!((h.committed()[0].style().width - 2.0).abs() < 1e-9);
    }
}
