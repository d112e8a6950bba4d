// SPDX-License-Identifier: MPL-2.0
//! Aspect-ratio preserving display sizing.
//!
//! The larger side of the natural image is pinned to [`MaxDimension`] and the
//! other side follows with the same ratio, rounded to the nearest pixel.

use crate::config::{DEFAULT_MAX_DIMENSION, MAX_MAX_DIMENSION, MIN_MAX_DIMENSION};

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square of `side` pixels.
    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// Upper bound applied to the larger side of an image, in pixels.
///
/// Values are clamped to `[MIN_MAX_DIMENSION, MAX_MAX_DIMENSION]` so a
/// hand-edited config cannot request a zero-sized or absurd display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxDimension(u32);

impl MaxDimension {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_MAX_DIMENSION, MAX_MAX_DIMENSION))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The `max × max` box used for placeholders.
    #[must_use]
    pub fn as_square(self) -> Dimensions {
        Dimensions::square(self.0)
    }
}

impl Default for MaxDimension {
    fn default() -> Self {
        Self(DEFAULT_MAX_DIMENSION)
    }
}

/// Scales `natural` so its larger side equals `max`.
///
/// Width wins ties, so a square image maps to `max × max`. A `0 × 0` input
/// also maps to `max × max`.
#[must_use]
pub fn scale_to_fit(natural: Dimensions, max: MaxDimension) -> Dimensions {
    let max = max.value();
    let Dimensions { width, height } = natural;

    if width >= height {
        if width == 0 {
            return Dimensions::square(max);
        }
        Dimensions::new(max, scale_side(height, max, width))
    } else {
        Dimensions::new(scale_side(width, max, height), max)
    }
}

/// `round(side × max / dominant)`, half away from zero.
fn scale_side(side: u32, max: u32, dominant: u32) -> u32 {
    let scaled = (f64::from(side) * f64::from(max) / f64::from(dominant)).round();
    // `side <= dominant` on every call path, so the result never exceeds `max`.
    scaled as u32
}
