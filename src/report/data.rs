/// Data structures for the combined dataset report.
///
/// These structs are populated by the report builder and consumed
/// by both the text and JSON formatters.
use serde::Serialize;

use crate::classify::ColorCategory;
use crate::options::View;
use crate::plot::Window;
use crate::score::{Anchors, Scores};

/// Comprehensive dataset report: summary, anchors, category breakdown,
/// the sampled radar subset, and the zoom window per view.
#[derive(Debug, Serialize)]
pub struct CombinedReport {
    pub generated_at: String,
    pub source: String,
    pub summary: DatasetSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Anchors>,
    pub categories: Vec<CategoryCount>,
    pub sampled: Vec<SampleEntry>,
    pub windows: Vec<ViewWindow>,
}

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    /// Rows in the full option sheet.
    pub options: usize,
    /// Rows in the curated exemplar sheet.
    pub subset: usize,
    /// Seed used for the sample shuffle, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: ColorCategory,
    pub count: usize,
    pub sampled: usize,
}

/// One sampled option, as shown on the radar grid.
#[derive(Debug, Serialize)]
pub struct SampleEntry {
    pub label: String,
    pub category: ColorCategory,
    pub scores: Scores,
}

/// Zoom window of the scatter viewport for one view.
#[derive(Debug, Serialize)]
pub struct ViewWindow {
    pub view: View,
    pub window: Window,
}
