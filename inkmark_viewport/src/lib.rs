// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkmark Viewport: bounded pinch-zoom and pan for an image under annotation.
//!
//! This crate provides a small, headless model of the transform applied to a
//! displayed photograph while the user zooms in to mark it precisely. It
//! focuses on:
//! - A uniform scale factor bounded by [`ZoomLimits`].
//! - Scale updates anchored at the pinch gesture's focal point.
//! - Panning that is only allowed once the view is zoomed in.
//!
//! It does **not** recognize gestures or render anything. Callers are
//! expected to:
//! - Feed scale-begin/update/end callbacks from their gesture recognizer into
//!   [`ViewportTransform::on_scale_begin`], [`ViewportTransform::on_scale_update`]
//!   and [`ViewportTransform::on_scale_end`].
//! - Compute single-finger movement deltas themselves and pass them to
//!   [`ViewportTransform::on_drag`].
//! - Draw the image through [`ViewportTransform::current_matrix`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use inkmark_viewport::{ViewportTransform, ZoomLimits};
//!
//! let mut view = ViewportTransform::new(ZoomLimits::new(1.0, 5.0));
//!
//! // Pinned at the resting scale: drags are dropped.
//! assert!(!view.on_drag(Vec2::new(10.0, 0.0)));
//!
//! // Pinch out around (50, 50).
//! view.on_scale_begin();
//! view.on_scale_update(2.0, Point::new(50.0, 50.0));
//! view.on_scale_end();
//! assert_eq!(view.scale(), 2.0);
//!
//! // Past the maximum: rejected whole.
//! view.on_scale_update(3.0, Point::new(50.0, 50.0));
//! assert_eq!(view.scale(), 2.0);
//!
//! // Zoomed in, so panning works now.
//! assert!(view.on_drag(Vec2::new(10.0, 0.0)));
//! ```
//!
//! ## Design notes
//!
//! - Rotation is not modelled.
//! - Out-of-range scale updates are rejected rather than clamped, which keeps
//!   the anchor math exact.
//! - The scalar and the matrix are updated in the same call, so they cannot
//!   drift apart under rapid pinch sequences.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod transform;

pub use limits::{GesturePhase, ZoomLimits};
pub use transform::ViewportTransform;
