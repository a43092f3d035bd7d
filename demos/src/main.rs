// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted annotation session and prints the resulting state.

use std::path::PathBuf;

use clap::Parser;
use inkmark_surface::{AnnotationSurface, SurfaceConfig};

mod script;

use script::Script;

#[derive(Parser, Debug)]
#[command(version, about = "Replay a scripted Inkmark annotation session")]
struct Args {
    /// Surface configuration (pen and zoom range); defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// TOML script of `[[event]]` entries.
    script: PathBuf,
}

/// Crates whose debug output is shown unless `RUST_LOG` says otherwise.
const LOGGED_CRATES: [&str; 4] = [
    env!("CARGO_CRATE_NAME"),
    "inkmark_surface",
    "inkmark_stroke",
    "inkmark_viewport",
];

fn default_log_filters(builder: &mut env_logger::Builder) -> &mut env_logger::Builder {
    for module in LOGGED_CRATES {
        builder.filter_module(module, log::LevelFilter::Debug);
    }
    builder
}

fn main() -> anyhow::Result<()> {
    default_log_filters(&mut env_logger::builder())
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SurfaceConfig::load(path)?,
        None => SurfaceConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let mut surface = AnnotationSurface::new(&config);
    let frames = script::replay(&mut surface, &script.events);
    log::info!("replayed {} events, {frames} redraws", script.events.len());

    let strokes = surface.strokes();
    let viewport = surface.viewport();
    println!(
        "strokes: {} committed, {} undone",
        strokes.committed().len(),
        strokes.redo_stack().len()
    );
    println!("scale: {:.4} ({:?})", viewport.scale(), viewport.phase());
    println!("matrix: {:?}", viewport.current_matrix().as_coeffs());
    for (i, stroke) in surface.frame().strokes.enumerate() {
        let points: Vec<String> = stroke
            .points()
            .iter()
            .map(|pt| format!("({}, {})", pt.x, pt.y))
            .collect();
        println!("stroke {i}: {}", points.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use log::{Level, Log, Metadata};

    use super::default_log_filters;

    fn enabled(logger: &env_logger::Logger, level: Level, target: &str) -> bool {
        logger.enabled(&Metadata::builder().level(level).target(target).build())
    }

    #[test]
    fn default_filters_show_debug_output_of_every_inkmark_crate() {
        let logger = default_log_filters(&mut env_logger::Builder::new()).build();
        for target in [
            "inkmark_replay::script",
            "inkmark_surface::surface",
            "inkmark_stroke::history",
            "inkmark_viewport::transform",
        ] {
            assert!(enabled(&logger, Level::Debug, target), "{target}");
            assert!(!enabled(&logger, Level::Trace, target), "{target}");
        }
        assert!(!enabled(&logger, Level::Debug, "clap"));
    }
}
