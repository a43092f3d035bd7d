// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted event logs for replaying an annotation session.

use std::{fs, path::Path};

use anyhow::Context;
use inkmark_surface::{AnnotationSurface, Command, DragTracker, GestureEvent, PointerEvent};
use kurbo::{Point, Vec2};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Script {
    #[serde(rename = "event", default)]
    pub(crate) events: Vec<ScriptEvent>,
}

/// One `[[event]]` entry.
///
/// `pan`/`lift` carry raw finger positions and go through a [`DragTracker`];
/// `drag` carries a ready-made delta.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    ScaleBegin,
    ScaleUpdate { factor: f64, x: f64, y: f64 },
    ScaleEnd,
    Pan { x: f64, y: f64 },
    Lift,
    Drag { dx: f64, dy: f64 },
    Undo,
    Redo,
    Reset,
}

impl Script {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read script `{}`", path.display()))?;
        Self::parse(&contents)
    }

    pub(crate) fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Feeds `events` into `surface`, returning how many frames the render loop
/// would have drawn.
pub(crate) fn replay(surface: &mut AnnotationSurface, events: &[ScriptEvent]) -> usize {
    let mut finger = DragTracker::new();
    let mut frames = 0;
    for event in events {
        match *event {
            ScriptEvent::Down { x, y } => surface.handle_pointer(PointerEvent::Down(Point::new(x, y))),
            ScriptEvent::Move { x, y } => surface.handle_pointer(PointerEvent::Move(Point::new(x, y))),
            ScriptEvent::Up { x, y } => surface.handle_pointer(PointerEvent::Up(Point::new(x, y))),
            ScriptEvent::ScaleBegin => surface.handle_gesture(GestureEvent::ScaleBegin),
            ScriptEvent::ScaleUpdate { factor, x, y } => {
                surface.handle_gesture(GestureEvent::ScaleUpdate {
                    factor,
                    focus: Point::new(x, y),
                });
            }
            ScriptEvent::ScaleEnd => surface.handle_gesture(GestureEvent::ScaleEnd),
            ScriptEvent::Pan { x, y } => {
                if let Some(delta) = finger.track(Point::new(x, y)) {
                    surface.handle_gesture(GestureEvent::Drag(delta));
                }
            }
            ScriptEvent::Lift => finger.release(),
            ScriptEvent::Drag { dx, dy } => {
                surface.handle_gesture(GestureEvent::Drag(Vec2::new(dx, dy)));
            }
            ScriptEvent::Undo => surface.handle_command(Command::Undo),
            ScriptEvent::Redo => surface.handle_command(Command::Redo),
            ScriptEvent::Reset => surface.handle_command(Command::Reset),
        }
        if surface.take_redraw_request() {
            frames += 1;
            log::debug!("redraw after {event:?}");
        }
    }
    frames
}
