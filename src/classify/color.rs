//! Color-category assignment.
//!
//! Each option gets exactly one of five display categories, derived from its
//! five dimension scores and its raw comfort code. The rule is evaluated in
//! precedence order and the first match wins, so the assignment is total and
//! deterministic.

use std::fmt;

use serde::Serialize;

use crate::score::Scores;

/// Display category of an option. Variant names double as CSS color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorCategory {
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "purple")]
    Purple,
    #[serde(rename = "goldenrod")]
    Goldenrod,
}

impl ColorCategory {
    /// All categories, in sampling-quota order.
    pub const ALL: [ColorCategory; 5] = [
        ColorCategory::Red,
        ColorCategory::Blue,
        ColorCategory::Green,
        ColorCategory::Purple,
        ColorCategory::Goldenrod,
    ];

    /// CSS color name used directly as the marker/line color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Goldenrod => "goldenrod",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score below which any single dimension forces `Red`.
const RED_FLOOR: f64 = 50.0;
/// Score counted as excellent for the `Purple` rule.
const PURPLE_BAR: f64 = 80.0;
/// Minimum number of excellent dimensions for `Purple`.
const PURPLE_COUNT: usize = 4;
/// All-dimensions floor for `Green`.
const GREEN_FLOOR: f64 = 70.0;

/// Assign the color category for one option.
///
/// Precedence: an underheating comfort code (-1) wins over every score rule,
/// then any weak dimension forces red, then the excellence rules, with
/// goldenrod as the catch-all.
pub fn category(scores: &Scores, comfort_code: i64) -> ColorCategory {
    if comfort_code == -1 {
        return ColorCategory::Blue;
    }
    let s = scores.as_array();
    if s.iter().any(|v| *v < RED_FLOOR) {
        return ColorCategory::Red;
    }
    if s.iter().filter(|v| **v >= PURPLE_BAR).count() >= PURPLE_COUNT {
        return ColorCategory::Purple;
    }
    if s.iter().all(|v| *v > GREEN_FLOOR) {
        return ColorCategory::Green;
    }
    ColorCategory::Goldenrod
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
