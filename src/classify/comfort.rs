//! Comfort-metric lookup table.
//!
//! Maps the categorical comfort outcome codes produced by the building
//! simulation to display labels, colors and scatter marker symbols.

use serde::Serialize;

/// Display attributes for one comfort outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComfortClass {
    pub code: i64,
    pub label: &'static str,
    pub color: &'static str,
    pub symbol: &'static str,
}

/// Known comfort outcomes, in code order (-1 underheating .. 2 overheating).
const CLASSES: &[ComfortClass] = &[
    ComfortClass {
        code: -1,
        label: "Underheating",
        color: "steelblue",
        symbol: "triangle-down",
    },
    ComfortClass {
        code: 0,
        label: "Comfortable",
        color: "seagreen",
        symbol: "circle",
    },
    ComfortClass {
        code: 1,
        label: "Warm",
        color: "orange",
        symbol: "triangle-up",
    },
    ComfortClass {
        code: 2,
        label: "Overheating",
        color: "crimson",
        symbol: "diamond",
    },
];

/// Sentinel for codes outside the known range.
pub const UNKNOWN: ComfortClass = ComfortClass {
    code: i64::MIN,
    label: "Unknown",
    color: "gray",
    symbol: "x",
};

/// Look up the display class for a comfort code. Total: any code outside
/// {-1, 0, 1, 2} maps to [`UNKNOWN`].
pub fn comfort(code: i64) -> &'static ComfortClass {
    CLASSES.iter().find(|c| c.code == code).unwrap_or(&UNKNOWN)
}
