// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use inkmark_stroke::StrokeStyle;
use inkmark_viewport::ZoomLimits;
use peniko::Color;
use serde::Deserialize;

/// Settings for an [`AnnotationSurface`](crate::AnnotationSurface), usually read from TOML.
///
/// Every field is optional; omitted ones fall back to an opaque black 8 pixel
/// pen and a `1.0..=5.0` zoom range.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Pen used for every stroke.
    pub stroke: StrokeConfig,
    /// Pinch-zoom range.
    pub zoom: ZoomConfig,
}

/// The `[stroke]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeConfig {
    /// Straight RGBA8 color.
    pub color: [u8; 4],
    /// Stroke width in view units.
    pub width: f64,
    /// Whether strokes are drawn anti-aliased.
    pub anti_alias: bool,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            width: StrokeStyle::DEFAULT_WIDTH,
            anti_alias: true,
        }
    }
}

/// The `[zoom]` table.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomConfig {
    /// Resting scale; the view is pinned here.
    pub min_scale: f64,
    /// Largest permitted magnification.
    pub max_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            min_scale: limits.min(),
            max_scale: limits.max(),
        }
    }
}

impl SurfaceConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load<A: AsRef<Path>>(path: A) -> Result<Self, ConfigError> {
        Self::load_impl(path.as_ref())
    }

    fn load_impl(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("loaded surface configuration from `{}`", path.display());
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a TOML document cannot constrain by itself.
    ///
    /// - The stroke width must be finite and positive.
    /// - Both scales must be finite, the minimum positive, and no larger than
    ///   the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.stroke.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "stroke width must be a positive number (found {width})"
            )));
        }

        let ZoomConfig {
            min_scale,
            max_scale,
        } = self.zoom;
        if !min_scale.is_finite() || !max_scale.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "zoom scales must be finite (found {min_scale}..={max_scale})"
            )));
        }
        if min_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "`min_scale` must be positive (found {min_scale})"
            )));
        }
        if min_scale > max_scale {
            return Err(ConfigError::Invalid(format!(
                "`min_scale` ({min_scale}) must not exceed `max_scale` ({max_scale})"
            )));
        }
        Ok(())
    }

    /// Returns the pen described by the `[stroke]` table.
    #[must_use]
    pub fn stroke_style(&self) -> StrokeStyle {
        let [r, g, b, a] = self.stroke.color;
        StrokeStyle::new(
            Color::from_rgba8(r, g, b, a),
            self.stroke.width,
            self.stroke.anti_alias,
        )
    }

    /// Returns the zoom range described by the `[zoom]` table.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.zoom.min_scale, self.zoom.max_scale)
    }
}

/// Error returned when a configuration cannot be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The document is not valid TOML or does not match the expected tables.
    Parse(toml::de::Error),
    /// The document parsed but holds values that cannot be used.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid configuration: {err}"),
            Self::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
