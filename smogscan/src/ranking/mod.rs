//! Ordering components by size and extracting the largest ones.


use std::cmp::Reverse;

use common::BitBuffer2;

use crate::labeling::{Component, LabelMap};
use crate::report::ComponentReport;

/// How many of the largest components are extracted when not configured.
pub const DEFAULT_TOP_N: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("Requested the top {requested} components but only {available} exist")]
    InsufficientComponents { requested: usize, available: usize },
    #[error("Ranked label {label} is not in a label map with {available} components")]
    UnknownLabel { label: u32, available: usize },
}

/// Components sorted by pixel count, largest first. Equal counts keep label
/// order (lower label first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedComponents {
    components: Vec<Component>,
}

impl RankedComponents {
    #[inline]
    pub fn as_slice(&self) -> &[Component] {
        &self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The `n` largest components, or `InsufficientComponents` if fewer exist.
    pub fn top(&self, n: usize) -> Result<&[Component], RankingError> {
        self.components
            .get(..n)
            .ok_or(RankingError::InsufficientComponents {
                requested: n,
                available: self.components.len(),
            })
    }

    pub fn labels_of_top(&self, n: usize) -> Result<Vec<u32>, RankingError> {
        Ok(self.top(n)?.iter().map(|c| c.label).collect())
    }

    pub fn total_pixels(&self) -> usize {
        self.components.iter().map(|c| c.pixel_count).sum()
    }

    /// Report listing components largest first.
    pub fn report(&self) -> ComponentReport {
        ComponentReport::new(self.components.clone())
    }

    pub fn into_vec(self) -> Vec<Component> {
        self.components
    }
}

impl<'a> IntoIterator for &'a RankedComponents {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Sorts `components` by descending pixel count.
///
/// The result is a permutation of the input: nothing is dropped or merged.
pub fn rank(components: &[Component]) -> RankedComponents {
    let mut components = components.to_vec();
    components.sort_unstable_by_key(|c| (Reverse(c.pixel_count), c.label));
    RankedComponents { components }
}

/// Builds a mask whose foreground is every pixel belonging to one of the `n`
/// largest components.
///
/// Fails with [`RankingError::InsufficientComponents`] when `ranked` holds
/// fewer than `n` components, and with [`RankingError::UnknownLabel`] when a
/// selected label does not exist in `label_map`. `n == 0` yields an
/// all-background mask.
pub fn extract_top_n(
    label_map: &LabelMap,
    ranked: &RankedComponents,
    n: usize,
) -> Result<BitBuffer2, RankingError> {
    let top = ranked.top(n)?;

    let mut selected = vec![false; label_map.num_labels() + 1];
    for component in top {
        let label = component.label as usize;
        let slot = selected
            .get_mut(label)
            .filter(|_| label != 0)
            .ok_or(RankingError::UnknownLabel {
                label: component.label,
                available: label_map.num_labels(),
            })?;
        *slot = true;
    }

    let mask = BitBuffer2::from_fn(label_map.width(), label_map.height(), |x, y| {
        selected[label_map.label_at(x, y) as usize]
    });

    tracing::debug!(
        n,
        labels = ?top.iter().map(|c| c.label).collect::<Vec<_>>(),
        foreground = mask.count_ones(),
        "extracted largest components"
    );

    Ok(mask)
}
