// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkmark Surface: wiring for an image annotation surface.
//!
//! [`inkmark_stroke`] and [`inkmark_viewport`] are independent engines. This
//! crate is the thin layer an application puts in front of them:
//! - [`AnnotationSurface`] routes [`PointerEvent`]s to the stroke history,
//!   [`GestureEvent`]s to the viewport transform and [`Command`]s to undo,
//!   redo and reset.
//! - [`AnnotationSurface::take_redraw_request`] tells the render loop when a
//!   new [`Frame`] is needed.
//! - [`DragTracker`] derives pan deltas from raw finger positions.
//! - [`SurfaceConfig`] loads the pen and zoom range from TOML.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use inkmark_surface::{AnnotationSurface, Command, GestureEvent, PointerEvent, SurfaceConfig};
//!
//! let config = SurfaceConfig::from_toml_str("[zoom]\nmax_scale = 4.0\n").unwrap();
//! let mut surface = AnnotationSurface::new(&config);
//!
//! surface.handle_pointer(PointerEvent::Down(Point::new(0.0, 0.0)));
//! surface.handle_pointer(PointerEvent::Move(Point::new(10.0, 10.0)));
//! surface.handle_pointer(PointerEvent::Up(Point::new(10.0, 10.0)));
//!
//! surface.handle_gesture(GestureEvent::ScaleUpdate { factor: 2.0, focus: Point::new(50.0, 50.0) });
//! surface.handle_gesture(GestureEvent::Drag(Vec2::new(5.0, 0.0)));
//!
//! assert!(surface.take_redraw_request());
//! let frame = surface.frame();
//! assert_eq!(frame.strokes.len(), 1);
//! assert_eq!(frame.image_transform.translation(), Vec2::new(-45.0, -50.0));
//! assert!(!surface.take_redraw_request());
//!
//! surface.handle_command(Command::Undo);
//! assert!(surface.strokes().can_redo());
//! ```

mod config;
mod drag;
mod event;
mod surface;

pub use config::{ConfigError, StrokeConfig, SurfaceConfig, ZoomConfig};
pub use drag::DragTracker;
pub use event::{Command, GestureEvent, PointerEvent};
pub use surface::{AnnotationSurface, Frame};

pub use inkmark_stroke;
pub use inkmark_viewport;
