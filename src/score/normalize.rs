//! Band normalization for radar display.
//!
//! All five dimensions map into a shared [50, 90] band so the radar axes
//! read on one scale. Cost and carbon interpolate between observed anchors
//! (best value → 90, worst → 50); comfort and compliance use fixed
//! category-to-score maps; circularity rescales its native 0–100 range.

/// Bottom of the display band (worst anchor).
const BAND_FLOOR: f64 = 50.0;
/// Top of the display band (best anchor).
const BAND_CEIL: f64 = 90.0;
const BAND_SPAN: f64 = BAND_CEIL - BAND_FLOOR;

/// Neutral score for unknown categorical codes.
const NEUTRAL: f64 = 50.0;

/// Fixed comfort-code score map. Comfortable is best; the extremes of the
/// thermal range sit near the band floor.
const COMFORT_SCORES: &[(i64, f64)] = &[(-1, 50.0), (0, 90.0), (1, 75.0), (2, 55.0)];

/// Linear interpolation anchored on observed extremes: `best` maps to 90,
/// `worst` to 50, values beyond the anchors clamp to the band ends.
/// Degenerate anchors (best == worst) map everything to 50.
pub fn band(value: f64, best: f64, worst: f64) -> f64 {
    if best == worst {
        return BAND_FLOOR;
    }
    let frac = (worst - value) / (worst - best);
    (BAND_FLOOR + frac * BAND_SPAN).clamp(BAND_FLOOR, BAND_CEIL)
}

/// Band score for a comfort outcome code. Unknown codes score neutral.
pub fn comfort_score(code: i64) -> f64 {
    COMFORT_SCORES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or(NEUTRAL)
}

/// Band score for a compliance tier code: tier 1 → 50 up to tier 5 → 90 in
/// 10-point steps. Unknown codes score neutral.
pub fn compliance_score(code: i64) -> f64 {
    if (1..=5).contains(&code) {
        40.0 + code as f64 * 10.0
    } else {
        NEUTRAL
    }
}

/// Band score for a circularity value: its native 0–100 scale rescales
/// linearly onto the band, clamped for out-of-range inputs.
pub fn circularity_score(circularity: f64) -> f64 {
    band(circularity, 100.0, 0.0)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
