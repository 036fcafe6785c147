//! Classify, label and rank in one call.

use std::path::Path;
use std::time::Instant;

use common::BitBuffer2;

use crate::classify::{PixelCondition, classify};
use crate::error::Result;
use crate::io::load_pixel_grid;
use crate::labeling::{LabelMap, label_components};
use crate::pixel::{PixelGrid, Thresholds};
use crate::ranking::{RankedComponents, RankingError, extract_top_n, rank};

/// Everything derived from one pixel grid.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// Classified foreground mask.
    pub mask: BitBuffer2,
    pub label_map: LabelMap,
    pub ranked: RankedComponents,
}

impl AnalysisOutput {
    /// Mask of the `n` largest components.
    pub fn top_n_mask(&self, n: usize) -> std::result::Result<BitBuffer2, RankingError> {
        extract_top_n(&self.label_map, &self.ranked, n)
    }
}

pub fn analyze<T, C>(
    grid: &PixelGrid<T>,
    condition: &C,
    thresholds: &Thresholds<T>,
) -> AnalysisOutput
where
    C: PixelCondition<T> + ?Sized,
{
    let start = Instant::now();

    let mask = classify(grid, condition, thresholds);
    let label_map = label_components(&mask);
    let ranked = rank(label_map.components());

    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        foreground = label_map.foreground_pixels(),
        components = ranked.len(),
        largest = ranked.as_slice().first().map_or(0, |c| c.pixel_count),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "image analysis complete"
    );

    AnalysisOutput {
        mask,
        label_map,
        ranked,
    }
}

/// Loads an 8-bit image from `path` and analyses it.
pub fn analyze_file<C>(
    path: impl AsRef<Path>,
    condition: &C,
    thresholds: &Thresholds<u8>,
) -> Result<AnalysisOutput>
where
    C: PixelCondition<u8> + ?Sized,
{
    let grid = load_pixel_grid(path)?;
    Ok(analyze(&grid, condition, thresholds))
}

#[cfg(test)]
mod tests {
    use common::Buffer2;

    use super::*;
    use crate::classify::ColorCondition;

    const R: [u8; 3] = [250, 10, 10];
    const C: [u8; 3] = [10, 250, 250];
    const K: [u8; 3] = [0, 0, 0];

    fn grid() -> PixelGrid<u8> {
        Buffer2::from_rows(&[
            [R, R, K, C, K],
            [R, K, K, C, K],
            [K, K, K, K, K],
            [K, C, K, R, R],
            [C, K, K, K, R],
        ])
    }

    #[test]
    fn test_analyze_red() {
        crate::testing::init_tracing();
        let output = analyze(&grid(), &ColorCondition::Red, &Thresholds::new(100, 50));

        assert_eq!(output.mask.count_ones(), 6);
        assert_eq!(output.label_map.num_labels(), 2);
        let counts: Vec<usize> = output.ranked.as_slice().iter().map(|c| c.pixel_count).collect();
        assert_eq!(counts, vec![3, 3]);
        // Equal sizes: the component found first (label 1, top row) ranks first.
        assert_eq!(output.ranked.as_slice()[0].label, 1);

        let top = output.top_n_mask(1).unwrap();
        assert_eq!(top.count_ones(), 3);
        assert!(top.get_xy(0, 0));
        assert!(!top.get_xy(4, 4));
    }

    #[test]
    fn test_analyze_cyan() {
        let output = analyze(&grid(), &ColorCondition::Cyan, &Thresholds::new(100, 50));

        // The vertical bar at x=3 and the diagonal pair at the bottom left.
        assert_eq!(output.label_map.num_labels(), 2);
        assert_eq!(output.ranked.total_pixels(), 4);
        assert_eq!(output.top_n_mask(2).unwrap(), output.mask);
        assert_eq!(
            output.top_n_mask(3),
            Err(RankingError::InsufficientComponents {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let img = image::RgbImage::from_fn(5, 5, |x, y| {
            image::Rgb(*grid().get(x as usize, y as usize))
        });
        img.save(&path).unwrap();

        let output = analyze_file(&path, &ColorCondition::Red, &Thresholds::new(100, 50)).unwrap();
        assert_eq!(output.label_map.num_labels(), 2);
        assert_eq!(output.ranked.total_pixels(), 6);
    }

    #[test]
    fn test_analyze_file_missing_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze_file(
            dir.path().join("none.png"),
            &ColorCondition::Red,
            &Thresholds::default(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
