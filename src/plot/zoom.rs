//! Per-view zoom windows ("zoom to sweet spot").
//!
//! The scatter viewport defaults to the rectangle bounded by the
//! best-performing sampled options (the sweet spot), padded by a per-view
//! fraction of the observed value range so switching views reads as a small
//! deliberate reframe rather than a jump.

use serde::Serialize;

use crate::classify::ColorCategory;
use crate::config::DisplayConfig;
use crate::options::View;
use crate::score::Scored;

/// Axis ranges of the scatter viewport, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Window {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// Padding per view, as a fraction of the observed value range.
fn padding(view: View) -> f64 {
    match view {
        View::Cost => 0.05,
        View::Carbon => 0.06,
        View::Comfort => 0.08,
        View::Compliance => 0.10,
        View::Circularity => 0.12,
    }
}

/// Absolute padding when the observed span collapses to a point.
const FLAT_PAD: f64 = 1.0;

/// Compute the zoom window for a view from the sampled options.
/// `None` when there is nothing to frame.
pub fn window(view: View, sampled: &[Scored], display: &DisplayConfig) -> Option<Window> {
    if sampled.is_empty() {
        return None;
    }

    // Sweet spot: the green/purple sampled options; everything sampled when
    // none qualify.
    let best: Vec<&Scored> = sampled
        .iter()
        .filter(|s| matches!(s.category, ColorCategory::Green | ColorCategory::Purple))
        .collect();
    let pool: Vec<&Scored> = if best.is_empty() {
        sampled.iter().collect()
    } else {
        best
    };

    let xs: Vec<f64> = pool
        .iter()
        .map(|s| s.option.display_cost(display.cost_divisor))
        .collect();
    let ys: Vec<f64> = pool
        .iter()
        .map(|s| s.option.display_carbon(display.carbon_divisor))
        .collect();

    let pad = padding(view);
    Some(Window {
        x: padded_range(&xs, pad),
        y: padded_range(&ys, pad),
    })
}

fn padded_range(values: &[f64], pad: f64) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    let span = max - min;
    let margin = if span == 0.0 { FLAT_PAD } else { span * pad };
    [min - margin, max + margin]
}

#[cfg(test)]
#[path = "zoom_test.rs"]
mod tests;
