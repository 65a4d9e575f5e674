//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Options listing: raw values with derived labels and category.
pub const OPTIONS: &str = "\
List the design options with their display values and classifications.

Each row shows the scaled cost/carbon values, the comfort and compliance
labels derived from the categorical metric codes, the circularity score,
and the color category.

Unknown metric codes never fail the listing: they render as \"Unknown\"
with a default icon, so a malformed row degrades instead of erroring.

Examples:
  fc options data/options.xlsx                  # cheapest first
  fc options data/options.xlsx --sort-by carbon
  fc options data/options.xlsx --sheet 5C       # list the exemplar sheet
  fc options data/options.xlsx --json";

/// Five-dimension scoring with band normalization and categories.
pub const SCORE: &str = "\
Score every option on the five dimensions and assign color categories.

Cost and carbon are normalized into a 50-90 band anchored on the curated
exemplar sheet: the best exemplar value maps to 90, the worst to 50, and
values beyond the anchors clamp to the band ends. Comfort and compliance
use fixed category-to-score maps; circularity rescales its 0-100 range
onto the same band.

Color categories (first matching rule wins):
  blue       comfort code -1 (underheating), regardless of scores
  red        any dimension below 50
  purple     at least 4 of 5 dimensions at 80 or above
  green      all 5 dimensions above 70
  goldenrod  everything else

Examples:
  fc score data/options.xlsx
  fc score data/options.xlsx --json";

/// Scatter figure: markers on the cost/carbon plane with a zoom window.
pub const SCATTER: &str = "\
Emit the scatter figure descriptor for one view.

Every option becomes a marker on the cost/carbon plane. The selected view
drives the marker colors (comfort view shows comfort classes, the other
views the color category), the zoom window around the best sampled
options, and whether the compliance icon overlays are visible.

Switching views is pure recomputation: the same workbook and view always
produce the same figure.

Views: cost, carbon, comfort, compliance, circularity

Examples:
  fc scatter data/options.xlsx --view cost --json   # figure JSON
  fc scatter data/options.xlsx --view compliance    # summary table";

/// Radar figure: polar small multiples of the sampled subset.
pub const RADAR: &str = "\
Emit the radar figure descriptor for the sampled subset.

The full option set is cut to at most 50 options with fixed per-category
budgets (red 15, blue 10, green 7, purple 2, goldenrod 16), then shuffled
for display. Each sampled option becomes one closed five-axis polar trace
on a 10x5 subplot grid sharing a fixed radial range.

Pass --seed (or set sampling.seed in fivec.toml) to make the display
order reproducible.

Examples:
  fc radar data/options.xlsx --json
  fc radar data/options.xlsx --seed 42 --json";

/// Combined report across all pipeline stages.
pub const REPORT: &str = "\
Generate a comprehensive report for the workbook.

Loads the workbook once and reports the dataset summary, normalization
anchors, per-category counts, the sampled radar subset, and the zoom
window for every view. All sections describe the same snapshot: with the
same seed, the figures the other commands emit match this report.

Examples:
  fc report data/options.xlsx
  fc report data/options.xlsx --seed 42 --json";

/// Standalone HTML page with both figures.
pub const HTML: &str = "\
Write a standalone HTML page with the scatter and radar figures.

The page embeds the figure JSON and loads Plotly from the CDN; no other
assets are needed. With a fixed --seed the output is deterministic:
the same workbook always renders identical bytes.

Examples:
  fc html data/options.xlsx --out options.html
  fc html data/options.xlsx --out options.html --view carbon --seed 42";
