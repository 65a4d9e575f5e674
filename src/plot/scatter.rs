//! Scatter figure assembly.
//!
//! One marker per option on the cost/carbon plane. Marker color tracks the
//! selected view (comfort view shows the comfort class color, every other
//! view the color category), symbols always come from the comfort class,
//! and the sampled options carry compliance-icon overlays that only show in
//! the compliance view.

use crate::classify;
use crate::config::DisplayConfig;
use crate::options::View;
use crate::score::Scored;

use super::model::{Axis, Figure, ImageOverlay, Layout, Marker, Title, Trace};
use super::zoom;

/// Marker pixel size.
const MARKER_SIZE: u32 = 10;
/// Icon overlay edge, as a fraction of the zoom window span.
const ICON_FRAC: f64 = 0.04;

pub fn figure(scored: &[Scored], sampled: &[Scored], view: View, display: &DisplayConfig) -> Figure {
    if scored.is_empty() {
        return Figure {
            data: Vec::new(),
            layout: empty_layout(view),
        };
    }

    let mut xs = Vec::with_capacity(scored.len());
    let mut ys = Vec::with_capacity(scored.len());
    let mut colors = Vec::with_capacity(scored.len());
    let mut symbols = Vec::with_capacity(scored.len());
    let mut texts = Vec::with_capacity(scored.len());

    for s in scored {
        let comfort = classify::comfort(s.option.comfort_metric);
        xs.push(s.option.display_cost(display.cost_divisor));
        ys.push(s.option.display_carbon(display.carbon_divisor));
        colors.push(match view {
            View::Comfort => comfort.color.to_string(),
            _ => s.category.as_str().to_string(),
        });
        symbols.push(comfort.symbol);
        texts.push(format!(
            "{} — {}, {}, circularity {:.0}",
            s.option.label(),
            comfort.label,
            classify::compliance(s.option.compliance_metric).label,
            s.option.circularity
        ));
    }

    let window = zoom::window(view, sampled, display);
    let images = icon_overlays(sampled, view, display, window.as_ref());

    let trace = Trace {
        kind: "scatter",
        mode: "markers",
        name: Some(format!("Design options — {view}")),
        x: xs,
        y: ys,
        marker: Some(Marker {
            color: colors,
            symbol: symbols,
            size: MARKER_SIZE,
        }),
        text: texts,
        hoverinfo: Some("text"),
        showlegend: Some(false),
        ..Default::default()
    };

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(Title::new(format!("Design options — {view} view"))),
            xaxis: Some(Axis {
                title: Title::new("Cost"),
                range: window.map(|w| w.x),
            }),
            yaxis: Some(Axis {
                title: Title::new("Carbon"),
                range: window.map(|w| w.y),
            }),
            images,
            showlegend: false,
            ..Default::default()
        },
    }
}

fn empty_layout(view: View) -> Layout {
    Layout {
        title: Some(Title::new(format!("Design options — {view} view"))),
        xaxis: Some(Axis {
            title: Title::new("Cost"),
            range: None,
        }),
        yaxis: Some(Axis {
            title: Title::new("Carbon"),
            range: None,
        }),
        showlegend: false,
        ..Default::default()
    }
}

/// Compliance icons at the sampled options' data coordinates, visible only
/// in the compliance view.
fn icon_overlays(
    sampled: &[Scored],
    view: View,
    display: &DisplayConfig,
    window: Option<&zoom::Window>,
) -> Vec<ImageOverlay> {
    let (sizex, sizey) = match window {
        Some(w) => (
            (w.x[1] - w.x[0]) * ICON_FRAC,
            (w.y[1] - w.y[0]) * ICON_FRAC,
        ),
        None => return Vec::new(),
    };

    sampled
        .iter()
        .map(|s| ImageOverlay {
            source: classify::compliance(s.option.compliance_metric).icon.to_string(),
            xref: "x",
            yref: "y",
            x: s.option.display_cost(display.cost_divisor),
            y: s.option.display_carbon(display.carbon_divisor),
            sizex,
            sizey,
            xanchor: "center",
            yanchor: "middle",
            layer: "above",
            visible: view == View::Compliance,
        })
        .collect()
}

#[cfg(test)]
#[path = "scatter_test.rs"]
mod tests;
