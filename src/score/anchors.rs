//! Normalization anchors observed from the curated exemplar subset.

use serde::Serialize;

use crate::options::DesignOption;

/// Observed cost/carbon extremes that anchor the [50, 90] band. Lower cost
/// and carbon are better, so `best` holds the minimum and `worst` the
/// maximum — named for their meaning, not their arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchors {
    pub cost_best: f64,
    pub cost_worst: f64,
    pub carbon_best: f64,
    pub carbon_worst: f64,
}

impl Anchors {
    /// Observe anchors from a set of options. `None` when the set is empty.
    pub fn observe(options: &[DesignOption]) -> Option<Anchors> {
        let first = options.first()?;
        let mut anchors = Anchors {
            cost_best: first.cost,
            cost_worst: first.cost,
            carbon_best: first.carbon,
            carbon_worst: first.carbon,
        };
        for o in options {
            anchors.cost_best = anchors.cost_best.min(o.cost);
            anchors.cost_worst = anchors.cost_worst.max(o.cost);
            anchors.carbon_best = anchors.carbon_best.min(o.carbon);
            anchors.carbon_worst = anchors.carbon_worst.max(o.carbon);
        }
        Some(anchors)
    }

    /// Anchor on the curated subset when it has rows, falling back to the
    /// full dataset. `None` only when both are empty.
    pub fn resolve(subset: &[DesignOption], full: &[DesignOption]) -> Option<Anchors> {
        Anchors::observe(subset).or_else(|| Anchors::observe(full))
    }
}
