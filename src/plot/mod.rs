//! Chart assembly (`fc scatter`, `fc radar`, `fc html`).
//!
//! Loads the workbook, scores and classifies every option, samples the
//! radar subset, and emits figure descriptors. JSON mode prints the figure
//! itself; table mode prints a short summary of what the figure contains.

mod html;
pub mod model;
mod radar;
mod scatter;
pub(crate) mod zoom;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::options::View;
use crate::report_helpers;
use crate::sample;
use crate::score::{self, Anchors, Scored};
use crate::workbook::{self, Source};

pub use model::Figure;
pub use zoom::Window;

/// Load, score and classify every option from the source.
fn load_scored(cfg: &Config, source: &Source) -> Result<Vec<Scored>, Box<dyn Error>> {
    let dataset = workbook::load(source, &cfg.workbook)?;
    match Anchors::resolve(&dataset.subset, &dataset.options) {
        Some(anchors) => Ok(score::score_all(&dataset.options, &anchors)),
        None => Ok(Vec::new()),
    }
}

pub fn run_scatter(
    cfg: &Config,
    source: &Source,
    view: View,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let scored = load_scored(cfg, source)?;
    let sampled = sample::sample(&scored, seed.or(cfg.sampling.seed));
    let figure = scatter::figure(&scored, &sampled, view, &cfg.display);

    if json {
        return report_helpers::print_json_stdout(&figure);
    }
    if scored.is_empty() {
        println!("No data available.");
        return Ok(());
    }
    println!("Scatter — {view} view");
    println!(" points: {}", scored.len());
    println!(
        " icon overlays: {} (visible: {})",
        figure.layout.images.len(),
        view == View::Compliance
    );
    if let Some(range) = figure.layout.xaxis.as_ref().and_then(|a| a.range) {
        println!(" zoom x: {:.1} to {:.1}", range[0], range[1]);
    }
    if let Some(range) = figure.layout.yaxis.as_ref().and_then(|a| a.range) {
        println!(" zoom y: {:.1} to {:.1}", range[0], range[1]);
    }
    Ok(())
}

pub fn run_radar(
    cfg: &Config,
    source: &Source,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let scored = load_scored(cfg, source)?;
    let sampled = sample::sample(&scored, seed.or(cfg.sampling.seed));
    let figure = radar::figure(&sampled);

    if json {
        return report_helpers::print_json_stdout(&figure);
    }
    if sampled.is_empty() {
        println!("No data available.");
        return Ok(());
    }
    println!("Radar — {} of {} options sampled", sampled.len(), scored.len());
    for (category, quota) in sample::QUOTAS {
        let taken = sampled.iter().filter(|s| s.category == category).count();
        println!(" {category:<9} {taken:>3} of {quota}");
    }
    Ok(())
}

pub fn run_html(
    cfg: &Config,
    source: &Source,
    out: &Path,
    view: View,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let scored = load_scored(cfg, source)?;
    let sampled = sample::sample(&scored, seed.or(cfg.sampling.seed));
    let scatter_figure = scatter::figure(&scored, &sampled, view, &cfg.display);
    let radar_figure = radar::figure(&sampled);

    let page = html::render("ZeroBuild design options", &scatter_figure, &radar_figure)?;
    fs::write(out, page).map_err(|e| format!("cannot write {}: {e}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}
