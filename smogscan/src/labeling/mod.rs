//! Connected component labeling by breadth-first flood fill.
//!
//! Components are 8-connected. Seeds are discovered by a row-major scan
//! (y outer, x inner), so label `k` is the k-th component whose top-most,
//! then left-most, pixel is reached first. Labels are `1..=k` with no gaps;
//! `0` is background.


use std::collections::VecDeque;

use arrayvec::ArrayVec;
use common::{BitBuffer2, Buffer2};

use crate::report::ComponentReport;

/// Offsets of the 8 surrounding cells, dx outer and dy inner.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One connected region of foreground pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    pub label: u32,
    pub pixel_count: usize,
}

/// Returns the in-bounds 8-neighbours of `(x, y)` on a `width` x `height` grid.
///
/// Neighbours past an edge are dropped, never wrapped.
#[inline]
pub fn neighbours(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> ArrayVec<(usize, usize), 8> {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < width && ny < height).then_some((nx, ny))
        })
        .collect()
}

/// Label grid plus the per-label pixel counts produced by [`label_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Buffer2<u32>,
    /// Indexed by `label - 1`, i.e. in discovery order.
    components: Vec<Component>,
}

impl LabelMap {
    #[inline]
    pub fn width(&self) -> usize {
        self.labels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.labels.height()
    }

    /// Number of connected components (excluding background).
    #[inline]
    pub fn num_labels(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn labels(&self) -> &Buffer2<u32> {
        &self.labels
    }

    /// The component table in discovery (label) order.
    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        *self.labels.get(x, y)
    }

    /// Pixel count of `label`, or `None` for background and unknown labels.
    pub fn pixel_count(&self, label: u32) -> Option<usize> {
        let idx = (label as usize).checked_sub(1)?;
        self.components.get(idx).map(|c| c.pixel_count)
    }

    /// Total number of labeled (foreground) pixels.
    pub fn foreground_pixels(&self) -> usize {
        self.components.iter().map(|c| c.pixel_count).sum()
    }

    /// Report listing components in discovery order.
    pub fn component_table_report(&self) -> ComponentReport {
        ComponentReport::new(self.components.clone())
    }

    pub fn into_parts(self) -> (Buffer2<u32>, Vec<Component>) {
        (self.labels, self.components)
    }
}

/// Labels every 8-connected foreground region of `mask`.
pub fn label_components(mask: &BitBuffer2) -> LabelMap {
    let width = mask.width();
    let height = mask.height();

    let mut labels = Buffer2::new_filled(width, height, 0u32);
    let mut components = Vec::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut next_label = 1u32;

    for y in 0..height {
        for x in 0..width {
            if !mask.get_xy(x, y) || labels[(x, y)] != 0 {
                continue;
            }

            labels[(x, y)] = next_label;
            queue.push_back((x, y));
            let pixel_count = flood_fill(mask, &mut labels, &mut queue, next_label) + 1;

            components.push(Component {
                label: next_label,
                pixel_count,
            });
            next_label += 1;
        }
    }

    tracing::debug!(
        width,
        height,
        components = components.len(),
        "labeled connected components"
    );

    LabelMap { labels, components }
}

/// Drains `queue`, spreading `label` to every unlabeled foreground neighbour.
/// Returns the number of pixels labeled here, not counting the seeds already queued.
fn flood_fill(
    mask: &BitBuffer2,
    labels: &mut Buffer2<u32>,
    queue: &mut VecDeque<(usize, usize)>,
    label: u32,
) -> usize {
    let width = mask.width();
    let height = mask.height();
    let mut added = 0;

    while let Some((x, y)) = queue.pop_front() {
        for (nx, ny) in neighbours(x, y, width, height) {
            if mask.get_xy(nx, ny) && labels[(nx, ny)] == 0 {
                labels[(nx, ny)] = label;
                added += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    added
}
