/// Report formatters for the options listing.
///
/// The table shows the raw-but-scaled cost/carbon values with the derived
/// comfort/compliance labels and color category; JSON output adds the icon
/// paths so a front end can render the same row without re-deriving.
use serde::Serialize;

use crate::classify::{self, ColorCategory};
use crate::config::DisplayConfig;
use crate::report_helpers;
use crate::score::Scored;

/// Print a table of options with display values and classifications.
///
/// Columns: Option, Cost, Carbon, Comfort, Compliance, Circ, Category.
pub fn print_report(scored: &[Scored], display: &DisplayConfig) {
    if scored.is_empty() {
        println!("No data available.");
        return;
    }

    let labels: Vec<String> = scored.iter().map(|s| s.option.label()).collect();
    let max_label = report_helpers::max_label_width(labels.iter().map(String::as_str), 6);
    // Width derived from the header format string below:
    // " {label}  {Cost:>8} {Carbon:>8} {Comfort:>12} {Compliance:>18} {Circ:>5}  Category"
    let header_width = 1 + max_label + 2 + 8 + 1 + 8 + 1 + 12 + 1 + 18 + 1 + 5 + 2 + 9;
    let separator = report_helpers::separator(header_width.max(70));

    println!("Design Options");
    println!("{separator}");
    println!(
        " {:<width$}  {:>8} {:>8} {:>12} {:>18} {:>5}  Category",
        "Option",
        "Cost",
        "Carbon",
        "Comfort",
        "Compliance",
        "Circ",
        width = max_label
    );
    println!("{separator}");

    for (s, label) in scored.iter().zip(&labels) {
        println!(
            " {:<width$}  {:>8.1} {:>8.1} {:>12} {:>18} {:>5.0}  {}",
            label,
            s.option.display_cost(display.cost_divisor),
            s.option.display_carbon(display.carbon_divisor),
            classify::comfort(s.option.comfort_metric).label,
            classify::compliance(s.option.compliance_metric).label,
            s.option.circularity,
            s.category,
            width = max_label
        );
    }

    println!("{separator}");
    println!(" Total {} options", scored.len());
}

/// JSON-serializable representation of one listed option.
#[derive(Serialize)]
struct JsonEntry {
    fabric: String,
    orientation: String,
    behaviour: String,
    cost: f64,
    carbon: f64,
    display_cost: f64,
    display_carbon: f64,
    comfort: &'static str,
    comfort_color: &'static str,
    compliance: &'static str,
    compliance_icon: &'static str,
    circularity: f64,
    category: ColorCategory,
}

/// Serialize the listed options as pretty-printed JSON to stdout.
pub fn print_json(
    scored: &[Scored],
    display: &DisplayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<JsonEntry> = scored
        .iter()
        .map(|s| {
            let comfort = classify::comfort(s.option.comfort_metric);
            let compliance = classify::compliance(s.option.compliance_metric);
            JsonEntry {
                fabric: s.option.fabric.clone(),
                orientation: s.option.orientation.clone(),
                behaviour: s.option.behaviour.clone(),
                cost: s.option.cost,
                carbon: s.option.carbon,
                display_cost: s.option.display_cost(display.cost_divisor),
                display_carbon: s.option.display_carbon(display.carbon_divisor),
                comfort: comfort.label,
                comfort_color: comfort.color,
                compliance: compliance.label,
                compliance_icon: compliance.icon,
                circularity: s.option.circularity,
                category: s.category,
            }
        })
        .collect();

    report_helpers::print_json_stdout(&entries)
}
