// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::limits::{GesturePhase, ZoomLimits};

/// Pinch-zoom and pan transform applied to the displayed image.
///
/// `ViewportTransform` tracks a uniform scale factor and the affine matrix
/// that maps image coordinates to view coordinates. The two are only ever
/// updated together, so the matrix's scale always equals [`scale`](Self::scale).
///
/// - Scale updates are anchored at the gesture's focal point, which stays put
///   on screen.
/// - A scale update that would leave [`ZoomLimits`] is rejected as a whole;
///   the factor is never clamped.
/// - Drags pan the image only while zoomed in past the minimum scale.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    scale: f64,
    limits: ZoomLimits,
    matrix: Affine,
    phase: GesturePhase,
    revision: u64,
}

impl ViewportTransform {
    /// Creates a transform bounded by `limits`.
    ///
    /// The scale starts at `1.0` clamped into the limits, with the matrix
    /// scaled to match.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let scale = limits.clamp(1.0);
        Self {
            scale,
            limits,
            matrix: Affine::scale(scale),
            phase: GesturePhase::Idle,
            revision: 0,
        }
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the phase of the scale gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while the view rests at the minimum scale and drags are dropped.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.scale <= self.limits.min()
    }

    /// Marks a scale gesture as active.
    pub fn on_scale_begin(&mut self) {
        self.phase = GesturePhase::Scaling;
    }

    /// Applies one tick of a scale gesture anchored at `focus` (view coordinates).
    ///
    /// Non-positive factors are rejected. Otherwise the update is applied only
    /// if `scale * factor` stays within the limits;
    /// otherwise neither the scale nor the matrix changes. Returns whether the
    /// update was applied.
    pub fn on_scale_update(&mut self, factor: f64, focus: Point) -> bool {
        if factor <= 0.0 {
            log::trace!("rejecting non-positive scale factor {factor}");
            return false;
        }
        let candidate = self.scale * factor;
        if !self.limits.contains(candidate) {
            log::trace!(
                "rejecting scale factor {factor} (would reach {candidate}, limits {:?})",
                self.limits
            );
            return false;
        }
        self.scale = candidate;
        self.matrix = self.matrix.then_scale_about(factor, focus);
        self.bump_revision();
        true
    }

    /// Marks the scale gesture as finished.
    pub fn on_scale_end(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Pans the image by `delta` view units, unless the view is pinned.
    ///
    /// `delta` is the difference between the current and previous position of
    /// a single moving finger. Returns whether the pan was applied.
    pub fn on_drag(&mut self, delta: Vec2) -> bool {
        if self.is_pinned() {
            log::trace!("view pinned at scale {}, dropping drag {delta:?}", self.scale);
            return false;
        }
        self.matrix = self.matrix.then_translate(delta);
        self.bump_revision();
        true
    }

    /// Returns the image-to-view matrix to render the image with.
    #[must_use]
    pub fn current_matrix(&self) -> Affine {
        self.matrix
    }

    /// Converts a view-space point (for example a touch position) into image coordinates.
    #[must_use]
    pub fn view_to_image_point(&self, pt: Point) -> Point {
        self.matrix.inverse() * pt
    }

    /// Converts an image-space point into view coordinates.
    #[must_use]
    pub fn image_to_view_point(&self, pt: Point) -> Point {
        self.matrix * pt
    }

    /// Returns the current revision counter.
    ///
    /// Bumped by every accepted scale update or drag; gesture phase changes
    /// and rejected updates leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}
