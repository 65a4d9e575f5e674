//! Bounded sampling for the radar grid.
//!
//! The radar view shows at most 50 subplots, so the full option set is cut
//! down to a fixed budget per color category: problem options (red) and
//! underheating options (blue) get the largest slices so they stay visible,
//! the excellent categories are small by construction, and goldenrod fills
//! the remainder. The concatenated sample is shuffled for visual variety;
//! a seed makes the order reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::classify::ColorCategory;
use crate::score::Scored;

/// Per-category sample budgets. The sum is the radar grid size (50).
pub const QUOTAS: [(ColorCategory, usize); 5] = [
    (ColorCategory::Red, 15),
    (ColorCategory::Blue, 10),
    (ColorCategory::Green, 7),
    (ColorCategory::Purple, 2),
    (ColorCategory::Goldenrod, 16),
];

/// Total sample budget across all categories.
pub fn budget() -> usize {
    QUOTAS.iter().map(|(_, n)| n).sum()
}

/// Take a bounded, category-balanced sample of the scored options.
///
/// Bucketing and prefix-taking are deterministic (input order); only the
/// final display order depends on the RNG. `seed` pins it.
pub fn sample(scored: &[Scored], seed: Option<u64>) -> Vec<Scored> {
    let mut picked: Vec<Scored> = Vec::with_capacity(budget());
    for (category, quota) in QUOTAS {
        picked.extend(
            scored
                .iter()
                .filter(|s| s.category == category)
                .take(quota)
                .cloned(),
        );
    }

    match seed {
        Some(seed) => picked.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => picked.shuffle(&mut rand::thread_rng()),
    }
    picked
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
