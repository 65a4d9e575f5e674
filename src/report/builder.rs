//! Report builder: loads the workbook once and constructs a `CombinedReport`.
//!
//! Scoring, classification, sampling and window computation all run on the
//! same loaded dataset, so the report is a consistent snapshot: the sampled
//! set shown here is the one the radar figure would draw with the same seed.

use std::error::Error;

use chrono::Utc;

use crate::classify::ColorCategory;
use crate::config::Config;
use crate::options::{DesignOption, View};
use crate::plot;
use crate::sample;
use crate::score::{self, Anchors};
use crate::workbook::{self, Source};

use super::data::*;

pub fn build_report(
    cfg: &Config,
    source: &Source,
    seed: Option<u64>,
) -> Result<CombinedReport, Box<dyn Error>> {
    let dataset = workbook::load(source, &cfg.workbook)?;
    Ok(assemble(
        &dataset.options,
        &dataset.subset,
        source.describe(),
        seed.or(cfg.sampling.seed),
        cfg,
    ))
}

/// Assemble the report from already-loaded sheets.
pub(crate) fn assemble(
    options: &[DesignOption],
    subset: &[DesignOption],
    source: String,
    seed: Option<u64>,
    cfg: &Config,
) -> CombinedReport {
    let anchors = Anchors::resolve(subset, options);
    let scored = match &anchors {
        Some(a) => score::score_all(options, a),
        None => Vec::new(),
    };
    let sampled = sample::sample(&scored, seed);

    let categories = ColorCategory::ALL
        .iter()
        .map(|c| CategoryCount {
            category: *c,
            count: scored.iter().filter(|s| s.category == *c).count(),
            sampled: sampled.iter().filter(|s| s.category == *c).count(),
        })
        .collect();

    let windows = View::ALL
        .iter()
        .filter_map(|view| {
            plot::zoom::window(*view, &sampled, &cfg.display).map(|window| ViewWindow {
                view: *view,
                window,
            })
        })
        .collect();

    let sampled_entries = sampled
        .iter()
        .map(|s| SampleEntry {
            label: s.option.label(),
            category: s.category,
            scores: s.scores,
        })
        .collect();

    CombinedReport {
        generated_at: Utc::now().to_rfc3339(),
        source,
        summary: DatasetSummary {
            options: options.len(),
            subset: subset.len(),
            seed,
        },
        anchors,
        categories,
        sampled: sampled_entries,
        windows,
    }
}
