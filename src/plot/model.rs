//! Serializable figure descriptors (Plotly trace/layout shape).
//!
//! The pipeline's output is data, not pixels: a [`Figure`] serializes to the
//! JSON object a Plotly-compatible front end hands straight to its plot
//! call. Unused fields stay out of the JSON entirely, so scatter and radar
//! traces share one struct without bloating either.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One chart trace. Scatter traces fill `x`/`y`/`marker`; radar traces fill
/// `r`/`theta`/`line`/`subplot`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub r: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub theta: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subplot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

/// Per-point marker styling, bound to the classifier output.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: Vec<String>,
    pub symbol: Vec<&'static str>,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageOverlay>,
    pub showlegend: bool,
    /// Polar subplot axes keyed "polar", "polar2", ... for the radar grid.
    /// An empty map flattens to nothing.
    #[serde(flatten)]
    pub polar: BTreeMap<String, Polar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Title {
        Title { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Image overlay positioned at data coordinates (compliance icons).
#[derive(Debug, Clone, Serialize)]
pub struct ImageOverlay {
    pub source: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub sizex: f64,
    pub sizey: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub layer: &'static str,
    pub visible: bool,
}

/// One polar subplot of the radar grid.
#[derive(Debug, Clone, Serialize)]
pub struct Polar {
    pub domain: Domain,
    pub radialaxis: RadialAxis,
    pub angularaxis: AngularAxis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct RadialAxis {
    pub range: [f64; 2],
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AngularAxis {
    pub rotation: f64,
    pub direction: &'static str,
    pub tickfont: TickFont,
}

#[derive(Debug, Clone, Serialize)]
pub struct TickFont {
    pub size: u32,
}
