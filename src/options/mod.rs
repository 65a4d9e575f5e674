//! Core data model: one row of the source workbook, plus the `fc options`
//! listing command.

mod report;

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::report_helpers;
use crate::score::{self, Anchors};
use crate::workbook::{self, Source};

/// One simulated building-design variant, as read from the workbook.
/// Read-only after load; every display field is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignOption {
    pub fabric: String,
    pub orientation: String,
    pub behaviour: String,
    pub cost: f64,
    pub carbon: f64,
    pub comfort_metric: i64,
    pub compliance_metric: i64,
    pub circularity: f64,
}

impl DesignOption {
    /// Display label combining the three categorical descriptors.
    pub fn label(&self) -> String {
        format!("{} / {} / {}", self.fabric, self.orientation, self.behaviour)
    }

    /// Cost scaled by the configured display divisor.
    pub fn display_cost(&self, divisor: f64) -> f64 {
        self.cost / divisor
    }

    /// Carbon scaled by the configured display divisor.
    pub fn display_carbon(&self, divisor: f64) -> f64 {
        self.carbon / divisor
    }
}

/// Chart view selector: which dimension drives marker coloring and the
/// zoom window. Switching views is pure recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Cost,
    Carbon,
    Comfort,
    Compliance,
    Circularity,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Cost,
        View::Carbon,
        View::Comfort,
        View::Compliance,
        View::Circularity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Carbon => "carbon",
            Self::Comfort => "comfort",
            Self::Compliance => "compliance",
            Self::Circularity => "circularity",
        }
    }

    /// Parse a CLI view key.
    pub fn from_key(key: &str) -> Option<View> {
        View::ALL.iter().copied().find(|v| v.as_str() == key)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn run(
    cfg: &Config,
    source: &Source,
    sheet: Option<&str>,
    sort_by: &str,
    top: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut wcfg = cfg.workbook.clone();
    if let Some(s) = sheet {
        wcfg.dataset_sheet = s.to_string();
    }
    let dataset = workbook::load(source, &wcfg)?;
    let Some(anchors) = Anchors::resolve(&dataset.subset, &dataset.options) else {
        if json {
            report::print_json(&[], &cfg.display)?;
        } else {
            println!("No data available.");
        }
        return Ok(());
    };
    let mut scored = score::score_all(&dataset.options, &anchors);

    // Sort ascending for the cost dimensions (cheapest first), descending
    // for circularity (best first).
    match sort_by {
        "carbon" => scored.sort_by(|a, b| a.option.carbon.total_cmp(&b.option.carbon)),
        "circularity" => {
            scored.sort_by(|a, b| b.option.circularity.total_cmp(&a.option.circularity))
        }
        _ => scored.sort_by(|a, b| a.option.cost.total_cmp(&b.option.cost)),
    }

    report_helpers::output_results(
        &mut scored,
        top,
        json,
        |r| report::print_json(r, &cfg.display),
        |r| report::print_report(r, &cfg.display),
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
