//! Header normalization for the source workbook.
//!
//! Header cells are trimmed and matched case-insensitively; a fixed renaming
//! table maps the verbose source headers onto field names ("User behaviour"
//! → behaviour, "Comfort - metric" → comfort_metric, "Compliance - metric"
//! → compliance_metric).

/// Canonical columns of an options sheet. All eight are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Fabric,
    Orientation,
    Behaviour,
    Cost,
    Carbon,
    ComfortMetric,
    ComplianceMetric,
    Circularity,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Fabric,
        Column::Orientation,
        Column::Behaviour,
        Column::Cost,
        Column::Carbon,
        Column::ComfortMetric,
        Column::ComplianceMetric,
        Column::Circularity,
    ];

    /// Field name used in reports and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fabric => "fabric",
            Self::Orientation => "orientation",
            Self::Behaviour => "behaviour",
            Self::Cost => "cost",
            Self::Carbon => "carbon",
            Self::ComfortMetric => "comfort_metric",
            Self::ComplianceMetric => "compliance_metric",
            Self::Circularity => "circularity",
        }
    }
}

/// Map a raw header cell onto a canonical column. `None` for headers the
/// loader does not care about (extra columns are ignored, not errors).
pub fn resolve(header: &str) -> Option<Column> {
    match header.trim().to_ascii_lowercase().as_str() {
        "fabric" => Some(Column::Fabric),
        "orientation" => Some(Column::Orientation),
        "behaviour" | "user behaviour" => Some(Column::Behaviour),
        "cost" => Some(Column::Cost),
        "carbon" => Some(Column::Carbon),
        "comfort - metric" | "comfort metric" => Some(Column::ComfortMetric),
        "compliance - metric" | "compliance metric" => Some(Column::ComplianceMetric),
        "circularity" => Some(Column::Circularity),
        _ => None,
    }
}
