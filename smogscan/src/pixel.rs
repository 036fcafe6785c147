//! Pixel grid and threshold types shared by the classifier.

use common::Buffer2;

/// A decoded RGB image. Channel values stay in whatever numeric domain the
/// loader produced (`u8` for 8-bit images, `f32` for float images).
pub type PixelGrid<T> = Buffer2<[T; 3]>;

/// Channel comparison thresholds, expressed in the same domain as the pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds<T> {
    /// A channel strictly above this counts as "high".
    pub upper: T,
    /// A channel strictly below this counts as "low".
    pub lower: T,
}

impl<T> Thresholds<T> {
    pub fn new(upper: T, lower: T) -> Self {
        Self { upper, lower }
    }
}

impl Default for Thresholds<u8> {
    fn default() -> Self {
        Self::new(100, 50)
    }
}
