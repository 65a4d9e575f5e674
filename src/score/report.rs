/// Report formatters for the five-dimension scores.
///
/// The table shows one row per option with its band scores and color
/// category, followed by a per-category count summary. JSON output wraps
/// the scored options in an envelope with the anchors and a timestamp.
use chrono::Utc;
use serde::Serialize;

use super::{Anchors, Scored, category_counts};
use crate::report_helpers;

/// Print a table of scored options with a category summary.
///
/// Columns: Option, the five dimension scores, Category.
pub fn print_report(scored: &[Scored], anchors: &Anchors) {
    if scored.is_empty() {
        println!("No data available.");
        return;
    }

    let labels: Vec<String> = scored.iter().map(|s| s.option.label()).collect();
    let max_label = report_helpers::max_label_width(labels.iter().map(String::as_str), 6);
    // Width derived from the header format string below:
    // " {label}  {Cost:>6} {Carbon:>6} {Comfort:>7} {Compl:>6} {Circ:>6}  Category"
    let header_width = 1 + max_label + 2 + 6 + 1 + 6 + 1 + 7 + 1 + 6 + 1 + 6 + 2 + 9;
    let separator = report_helpers::separator(header_width.max(70));

    println!("Design Option Scores");
    println!("{separator}");
    println!(
        " anchors: cost {:.0}-{:.0}, carbon {:.0}-{:.0} (best-worst)",
        anchors.cost_best, anchors.cost_worst, anchors.carbon_best, anchors.carbon_worst
    );
    println!("{separator}");
    println!(
        " {:<width$}  {:>6} {:>6} {:>7} {:>6} {:>6}  Category",
        "Option",
        "Cost",
        "Carbon",
        "Comfort",
        "Compl",
        "Circ",
        width = max_label
    );
    println!("{separator}");

    for (s, label) in scored.iter().zip(&labels) {
        println!(
            " {:<width$}  {:>6.1} {:>6.1} {:>7.1} {:>6.1} {:>6.1}  {}",
            label,
            s.scores.cost,
            s.scores.carbon,
            s.scores.comfort,
            s.scores.compliance,
            s.scores.circularity,
            s.category,
            width = max_label
        );
    }

    println!("{separator}");
    let counts = category_counts(scored);
    let summary: Vec<String> = counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(c, n)| format!("{c}: {n}"))
        .collect();
    println!(" Total {} options ({})", scored.len(), summary.join(", "));
}

/// JSON envelope for `fc score --json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchors: Option<&'a Anchors>,
    options: &'a [Scored],
}

/// Serialize the scored options as pretty-printed JSON to stdout.
pub fn print_json(
    scored: &[Scored],
    anchors: Option<&Anchors>,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        anchors,
        options: scored,
    })
}
