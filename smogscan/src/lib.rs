//! Smogscan - colour-marking analysis for pollution maps.
//!
//! A map image is reduced to a binary mask of red or cyan markings, the mask
//! is split into 8-connected regions, and the regions are ranked by size:
//!
//! ```rust,ignore
//! use smogscan::{ColorCondition, Thresholds, analyze, load_pixel_grid};
//!
//! let grid = load_pixel_grid("data/map.png")?;
//! let output = analyze(&grid, &ColorCondition::Red, &Thresholds::new(100, 50));
//! println!("{}", output.ranked.report());
//! let largest_two = output.top_n_mask(2)?;
//! ```

pub mod classify;
mod error;
pub mod io;
pub mod labeling;
mod pipeline;
mod pixel;
pub mod ranking;
mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use common::{BitBuffer2, Buffer2};
pub use error::{Error, Result};

// ============================================================================
// Classification
// ============================================================================

pub use classify::{ColorCondition, ParseConditionError, PixelCondition, classify, evaluate};
pub use pixel::{PixelGrid, Thresholds};

// ============================================================================
// Labeling and ranking
// ============================================================================

pub use labeling::{Component, LabelMap, label_components, neighbours};
pub use ranking::{DEFAULT_TOP_N, RankedComponents, RankingError, extract_top_n, rank};
pub use report::ComponentReport;

// ============================================================================
// Pipeline and IO
// ============================================================================

pub use io::{
    IoError, load_pixel_grid, load_pixel_grid_normalized, mask_to_rgb, save_mask, write_report,
};
pub use pipeline::{AnalysisOutput, analyze, analyze_file};
