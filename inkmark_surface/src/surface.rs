// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use inkmark_stroke::{RenderList, StrokeHistory, StrokeStyle};
use inkmark_viewport::ViewportTransform;
use kurbo::Affine;

use crate::{Command, GestureEvent, PointerEvent, SurfaceConfig};

/// An image being annotated: the stroke history drawn over it and the
/// transform it is displayed with.
///
/// The two engines stay independent; the surface only routes each input
/// stream to its engine and reports when either one needs to be redrawn.
#[derive(Clone, Debug)]
pub struct AnnotationSurface {
    strokes: StrokeHistory,
    viewport: ViewportTransform,
    drawn_revisions: (u64, u64),
}

impl AnnotationSurface {
    /// Creates an empty surface from `config`.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            strokes: StrokeHistory::with_style(config.stroke_style()),
            viewport: ViewportTransform::new(config.zoom_limits()),
            drawn_revisions: (0, 0),
        }
    }

    /// Routes drawing input to the stroke history.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        log::debug!("pointer: {event:?}");
        match event {
            PointerEvent::Down(pt) => self.strokes.begin_stroke(pt),
            PointerEvent::Move(pt) => self.strokes.extend_stroke(pt),
            PointerEvent::Up(_) => self.strokes.commit_stroke(),
        }
    }

    /// Routes view input to the viewport transform.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::ScaleBegin => self.viewport.on_scale_begin(),
            GestureEvent::ScaleUpdate { factor, focus } => {
                if self.viewport.on_scale_update(factor, focus) {
                    log::debug!("zoomed to {:.3} about {focus:?}", self.viewport.scale());
                }
            }
            GestureEvent::ScaleEnd => self.viewport.on_scale_end(),
            GestureEvent::Drag(delta) => {
                self.viewport.on_drag(delta);
            }
        }
    }

    /// Applies an editing command to the stroke history.
    pub fn handle_command(&mut self, command: Command) {
        log::debug!("command: {command:?}");
        match command {
            Command::Undo => self.strokes.undo(),
            Command::Redo => self.strokes.redo(),
            Command::Reset => self.strokes.reset(),
        }
    }

    /// Returns the stroke history.
    #[must_use]
    pub fn strokes(&self) -> &StrokeHistory {
        &self.strokes
    }

    /// Returns the viewport transform.
    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Returns what the compositor needs to draw the current frame.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            strokes: self.strokes.render_list(),
            style: self.strokes.style(),
            image_transform: self.viewport.current_matrix(),
        }
    }

    /// Returns `true` if anything changed since the previous call.
    ///
    /// The first call on a fresh surface returns `false`.
    pub fn take_redraw_request(&mut self) -> bool {
        let current = (self.strokes.revision(), self.viewport.revision());
        let changed = current != self.drawn_revisions;
        self.drawn_revisions = current;
        changed
    }
}

impl Default for AnnotationSurface {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}

/// Per-frame snapshot for an external compositor.
///
/// The image is drawn through `image_transform`; the strokes are in view-local
/// coordinates and are drawn on top without it, bottom to top.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Strokes in draw order.
    pub strokes: RenderList<'a>,
    /// Pen every stroke is drawn with.
    pub style: &'a StrokeStyle,
    /// Image-to-view matrix for the base image.
    pub image_transform: Affine,
}
