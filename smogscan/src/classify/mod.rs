//! Pixel classification into a binary foreground mask.
//!
//! A [`PixelCondition`] decides per pixel whether it is foreground. The two
//! colour conditions used for pollution maps are provided by
//! [`ColorCondition`]; anything else can implement the trait directly.

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use common::BitBuffer2;
use serde::{Deserialize, Serialize};

use crate::pixel::{PixelGrid, Thresholds};

/// Per-pixel foreground predicate.
pub trait PixelCondition<T> {
    fn matches(&self, pixel: &[T; 3], thresholds: &Thresholds<T>) -> bool;
}

/// Colour of the map markings to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCondition {
    /// `r > upper && g < lower && b < lower`.
    Red,
    /// `r < upper && g > upper && b > upper`.
    ///
    /// All three comparisons use `upper`; `lower` is ignored.
    Cyan,
}

impl ColorCondition {
    pub const ALL: [ColorCondition; 2] = [ColorCondition::Red, ColorCondition::Cyan];

    pub fn name(self) -> &'static str {
        match self {
            ColorCondition::Red => "red",
            ColorCondition::Cyan => "cyan",
        }
    }

    /// Base file name (without extension) for the classified mask image.
    pub fn mask_file_stem(self) -> &'static str {
        match self {
            ColorCondition::Red => "map-red-pixels",
            ColorCondition::Cyan => "map-cyan-pixels",
        }
    }
}

impl<T: PartialOrd> PixelCondition<T> for ColorCondition {
    #[inline]
    fn matches(&self, [r, g, b]: &[T; 3], thresholds: &Thresholds<T>) -> bool {
        match self {
            ColorCondition::Red => {
                *r > thresholds.upper && *g < thresholds.lower && *b < thresholds.lower
            }
            ColorCondition::Cyan => {
                *r < thresholds.upper && *g > thresholds.upper && *b > thresholds.upper
            }
        }
    }
}

impl fmt::Display for ColorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown colour condition '{0}', expected one of: red, cyan")]
pub struct ParseConditionError(pub String);

impl FromStr for ColorCondition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorCondition::ALL
            .into_iter()
            .find(|condition| condition.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseConditionError(s.to_string()))
    }
}

/// Evaluates `condition` on the pixel at `(x, y)`.
///
/// Panics if `(x, y)` is outside the grid.
#[inline]
pub fn evaluate<T, C>(
    grid: &PixelGrid<T>,
    condition: &C,
    thresholds: &Thresholds<T>,
    x: usize,
    y: usize,
) -> bool
where
    C: PixelCondition<T> + ?Sized,
{
    assert!(
        x < grid.width() && y < grid.height(),
        "pixel ({x}, {y}) outside {}x{} grid",
        grid.width(),
        grid.height()
    );
    condition.matches(grid.get(x, y), thresholds)
}

/// Classifies every pixel of `grid`, returning a mask of the same size where
/// set bits are foreground. An empty grid yields an empty mask.
pub fn classify<T, C>(
    grid: &PixelGrid<T>,
    condition: &C,
    thresholds: &Thresholds<T>,
) -> BitBuffer2
where
    C: PixelCondition<T> + ?Sized,
{
    let width = grid.width();
    let height = grid.height();
    let mut mask = BitBuffer2::new_default(width, height);

    for y in 0..height {
        for x in 0..width {
            if condition.matches(grid.get(x, y), thresholds) {
                mask.set_xy(x, y, true);
            }
        }
    }

    tracing::debug!(
        width,
        height,
        foreground = mask.count_ones(),
        "classified pixel grid"
    );

    mask
}
