// Copyright 2026 the Inkmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Closed range of permitted zoom factors.
///
/// The minimum is the resting scale: at it the view is pinned and pan deltas
/// are dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    min: f64,
    max: f64,
}

impl ZoomLimits {
    /// Creates limits spanning `min..=max`.
    ///
    /// A swapped pair is normalized so that `min <= max`, and the minimum is
    /// kept strictly positive; a zero scale collapses the matrix beyond recovery.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(f64::MIN_POSITIVE);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Returns the minimum (resting) scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `scale` lies within the closed range.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }

    /// Clamps `scale` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics, even for NaN limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

impl Default for ZoomLimits {
    /// Unzoomed at rest, up to five times magnification.
    fn default() -> Self {
        Self { min: 1.0, max: 5.0 }
    }
}

/// Phase of a two-finger scale gesture.
///
/// Drags are accepted in either phase; simultaneous pinch and pan streams are
/// tolerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No scale gesture is active.
    #[default]
    Idle,
    /// Between a scale-begin and the matching scale-end.
    Scaling,
}
