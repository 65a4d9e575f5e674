//! Five-dimension scoring (`fc score` command).
//!
//! Turns raw option rows into normalized band scores (cost, carbon, comfort,
//! compliance, circularity) plus the derived color category. Cost and carbon
//! anchor on the extremes observed in the curated exemplar subset so the
//! best exemplar sits near the top of the band.

pub(crate) mod anchors;
mod normalize;
mod report;

use std::error::Error;

use serde::Serialize;

use crate::classify::{self, ColorCategory};
use crate::config::Config;
use crate::options::DesignOption;
use crate::workbook::{self, Source};

pub use anchors::Anchors;
pub use normalize::{band, circularity_score, comfort_score, compliance_score};

/// The five normalized dimension scores of one option (band scale, 50–90).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub cost: f64,
    pub carbon: f64,
    pub comfort: f64,
    pub compliance: f64,
    pub circularity: f64,
}

impl Scores {
    /// Dimension order shared by the radar axes and the category rule.
    pub const DIMENSIONS: [&'static str; 5] =
        ["Cost", "Carbon", "Comfort", "Compliance", "Circularity"];

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.cost,
            self.carbon,
            self.comfort,
            self.compliance,
            self.circularity,
        ]
    }
}

/// An option bundled with its derived scores and color category.
#[derive(Debug, Clone, Serialize)]
pub struct Scored {
    #[serde(flatten)]
    pub option: DesignOption,
    pub scores: Scores,
    pub category: ColorCategory,
}

/// Score one option against the observed anchors.
pub fn score_option(option: &DesignOption, anchors: &Anchors) -> Scores {
    Scores {
        cost: band(option.cost, anchors.cost_best, anchors.cost_worst),
        carbon: band(option.carbon, anchors.carbon_best, anchors.carbon_worst),
        comfort: comfort_score(option.comfort_metric),
        compliance: compliance_score(option.compliance_metric),
        circularity: circularity_score(option.circularity),
    }
}

/// Score and categorize every option, preserving input order.
pub fn score_all(options: &[DesignOption], anchors: &Anchors) -> Vec<Scored> {
    options
        .iter()
        .map(|o| {
            let scores = score_option(o, anchors);
            let category = classify::category(&scores, o.comfort_metric);
            Scored {
                option: o.clone(),
                scores,
                category,
            }
        })
        .collect()
}

/// Count options per color category, in quota order.
pub fn category_counts(scored: &[Scored]) -> Vec<(ColorCategory, usize)> {
    ColorCategory::ALL
        .iter()
        .map(|c| (*c, scored.iter().filter(|s| s.category == *c).count()))
        .collect()
}

pub fn run(cfg: &Config, source: &Source, json: bool) -> Result<(), Box<dyn Error>> {
    let dataset = workbook::load(source, &cfg.workbook)?;
    let Some(anchors) = Anchors::resolve(&dataset.subset, &dataset.options) else {
        if json {
            report::print_json(&[], None)?;
        } else {
            println!("No data available.");
        }
        return Ok(());
    };
    let scored = score_all(&dataset.options, &anchors);

    if json {
        report::print_json(&scored, Some(&anchors))
    } else {
        report::print_report(&scored, &anchors);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
