//! Standalone HTML export.
//!
//! Writes a single page that embeds the figure JSON and hands it to Plotly
//! loaded from the CDN. Rendering is deterministic: the same figures always
//! produce identical bytes.

use std::error::Error;

use super::model::Figure;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn render(title: &str, scatter: &Figure, radar: &Figure) -> Result<String, Box<dyn Error>> {
    let scatter_json = serde_json::to_string(scatter)?;
    let radar_json = serde_json::to_string(radar)?;

    let mut page = String::with_capacity(scatter_json.len() + radar_json.len() + 2048);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>");
    page.push_str(&esc(title));
    page.push_str("</title>\n<script src=\"");
    page.push_str(PLOTLY_CDN);
    page.push_str("\"></script>\n");
    page.push_str("<style>body{font-family:sans-serif;margin:0 auto;max-width:1100px}");
    page.push_str("#scatter{height:560px}#radar{height:1400px}</style>\n");
    page.push_str("</head>\n<body>\n<h1>");
    page.push_str(&esc(title));
    page.push_str("</h1>\n<div id=\"scatter\"></div>\n<div id=\"radar\"></div>\n<script>\n");
    page.push_str("const scatter = ");
    page.push_str(&scatter_json);
    page.push_str(";\nconst radar = ");
    page.push_str(&radar_json);
    page.push_str(";\nPlotly.newPlot(\"scatter\", scatter.data, scatter.layout);\n");
    page.push_str("Plotly.newPlot(\"radar\", radar.data, radar.layout);\n");
    page.push_str("</script>\n</body>\n</html>\n");
    Ok(page)
}

/// Minimal HTML escaping for text nodes and attribute values.
fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
