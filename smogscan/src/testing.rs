//! Test fixtures shared across modules.

use common::BitBuffer2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use common::log_setup::init_test_tracing as init_tracing;

/// Builds a mask from text rows: `#` is foreground, anything else background.
pub fn mask_from_rows(rows: &[&str]) -> BitBuffer2 {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    BitBuffer2::from_fn(width, height, |x, y| {
        rows[y].chars().nth(x).is_some_and(|c| c == '#')
    })
}

/// Deterministic random mask with roughly `density` of cells set.
pub fn random_mask(seed: u64, width: usize, height: usize, density: f64) -> BitBuffer2 {
    let mut rng = StdRng::seed_from_u64(seed);
    BitBuffer2::from_fn(width, height, |_, _| rng.random_bool(density))
}
