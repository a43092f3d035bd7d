// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Paint attributes of a stroke, fixed when the stroke is created.
///
/// The default is an opaque black pen, 8 pixels wide, drawn anti-aliased.
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    /// Solid color the stroke is painted with.
    pub color: Color,
    /// Stroke width in view-local units.
    pub width: f64,
    /// Whether the renderer should anti-alias the stroke's edges.
    pub anti_alias: bool,
}

impl StrokeStyle {
    /// Width of the default pen.
    pub const DEFAULT_WIDTH: f64 = 8.0;

    /// Creates a style from its parts.
    #[must_use]
    pub const fn new(color: Color, width: f64, anti_alias: bool) -> Self {
        Self {
            color,
            width,
            anti_alias,
        }
    }

    /// Returns a [`kurbo::Stroke`] of this style's width, with round joins and caps.
    ///
    /// Renderers that stroke [`Stroke::to_path`](crate::Stroke::to_path) outlines
    /// can use this directly.
    #[must_use]
    pub fn to_kurbo_stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.width)
            .with_join(kurbo::Join::Round)
            .with_caps(kurbo::Cap::Round)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, Self::DEFAULT_WIDTH, true)
    }
}
