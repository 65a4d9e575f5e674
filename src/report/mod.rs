//! Combined report module (`fc report` command).
//!
//! Loads the workbook once and produces a unified markdown or JSON report:
//! dataset summary, normalization anchors, category breakdown, the sampled
//! radar subset, and the per-view zoom windows. The single-load design keeps
//! every section consistent with the figures the other commands would emit
//! for the same seed.

/// Report builder: loads the workbook and constructs the `CombinedReport`.
mod builder;
/// Data structures for the combined report (sections, entries, summaries).
pub(crate) mod data;
/// JSON serialization of the combined report.
mod json;
/// Markdown (table) formatting of the combined report.
mod markdown;

use std::error::Error;

use crate::config::Config;
use crate::workbook::Source;

pub use data::*;

pub use builder::build_report;

/// Entry point: build the combined report and print it as markdown or JSON.
pub fn run(cfg: &Config, source: &Source, seed: Option<u64>, json: bool) -> Result<(), Box<dyn Error>> {
    let report = build_report(cfg, source, seed)?;

    if json {
        json::print_json(&report)?;
    } else {
        markdown::print_markdown(&report);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
