// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkmark Stroke: freehand stroke history with undo/redo.
//!
//! This crate turns a pointer gesture stream into a drawing history for
//! annotating an image. It does **not** draw anything itself; callers:
//! - Route pointer-down/move/up into [`StrokeHistory::begin_stroke`],
//!   [`StrokeHistory::extend_stroke`] and [`StrokeHistory::commit_stroke`].
//! - Wire undo/redo/reset controls to the matching methods.
//! - Draw [`StrokeHistory::render_list`] over the image each frame, for
//!   example by stroking [`Stroke::to_path`] with [`StrokeStyle::to_kurbo_stroke`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use inkmark_stroke::StrokeHistory;
//!
//! let mut history = StrokeHistory::new();
//!
//! // One gesture: down, two moves, up.
//! history.begin_stroke(Point::new(0.0, 0.0));
//! history.extend_stroke(Point::new(10.0, 0.0));
//! history.extend_stroke(Point::new(10.0, 10.0));
//! history.commit_stroke();
//! assert_eq!(history.committed().len(), 1);
//!
//! history.undo();
//! assert_eq!(history.render_list().count(), 0);
//!
//! history.redo();
//! assert_eq!(history.render_list().count(), 1);
//! ```
//!
//! ## Redraws
//!
//! Instead of invoking a callback, every state change bumps
//! [`StrokeHistory::revision`]. A render loop remembers the last revision it
//! drew and redraws when the value moves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod history;
mod stroke;
mod style;

pub use history::{RenderList, StrokeHistory};
pub use stroke::Stroke;
pub use style::StrokeStyle;
