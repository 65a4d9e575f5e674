//! Radar (polar small-multiples) figure assembly.
//!
//! One closed scatterpolar trace per sampled option, laid out on a 10×5
//! grid of polar subplot domains. Every subplot shares the same radial
//! range so the shapes compare across the grid at a glance.

use std::collections::BTreeMap;

use crate::score::{Scored, Scores};

use super::model::{AngularAxis, Domain, Figure, Layout, Line, Polar, RadialAxis, TickFont, Title, Trace};

/// Grid dimensions of the small-multiples view.
const GRID_ROWS: usize = 10;
const GRID_COLS: usize = 5;
/// Gap between subplot domains, as a fraction of the canvas.
const GAP: f64 = 0.015;

/// Shared radial range; the score band (50–90) sits inside it.
const RADIAL_RANGE: [f64; 2] = [0.0, 100.0];

const LINE_WIDTH: f64 = 1.5;
const TICK_SIZE: u32 = 7;

pub fn figure(sampled: &[Scored]) -> Figure {
    let mut data = Vec::new();
    let mut polar = BTreeMap::new();

    for (i, s) in sampled.iter().take(GRID_ROWS * GRID_COLS).enumerate() {
        let key = subplot_key(i);

        let mut r: Vec<f64> = s.scores.as_array().to_vec();
        r.push(r[0]); // close the loop
        let mut theta: Vec<&'static str> = Scores::DIMENSIONS.to_vec();
        theta.push(Scores::DIMENSIONS[0]);

        data.push(Trace {
            kind: "scatterpolar",
            mode: "lines",
            name: Some(s.option.label()),
            r,
            theta,
            fill: Some("toself"),
            subplot: Some(key.clone()),
            line: Some(Line {
                color: s.category.as_str(),
                width: LINE_WIDTH,
            }),
            hoverinfo: Some("name+r+theta"),
            showlegend: Some(false),
            ..Default::default()
        });

        polar.insert(
            key,
            Polar {
                domain: domain(i),
                radialaxis: RadialAxis {
                    range: RADIAL_RANGE,
                    visible: false,
                },
                angularaxis: AngularAxis {
                    rotation: 90.0,
                    direction: "clockwise",
                    tickfont: TickFont { size: TICK_SIZE },
                },
            },
        );
    }

    Figure {
        data,
        layout: Layout {
            title: Some(Title::new("Sampled design options — five dimensions")),
            showlegend: false,
            polar,
            ..Default::default()
        },
    }
}

/// Plotly's polar axes are keyed "polar", "polar2", "polar3", ...
fn subplot_key(index: usize) -> String {
    if index == 0 {
        "polar".to_string()
    } else {
        format!("polar{}", index + 1)
    }
}

/// Domain of the i-th subplot: row-major from the top-left.
fn domain(index: usize) -> Domain {
    let row = index / GRID_COLS;
    let col = index % GRID_COLS;
    let cell_w = 1.0 / GRID_COLS as f64;
    let cell_h = 1.0 / GRID_ROWS as f64;
    Domain {
        x: [
            col as f64 * cell_w + GAP / 2.0,
            (col + 1) as f64 * cell_w - GAP / 2.0,
        ],
        y: [
            1.0 - (row + 1) as f64 * cell_h + GAP / 2.0,
            1.0 - row as f64 * cell_h - GAP / 2.0,
        ],
    }
}

#[cfg(test)]
#[path = "radar_test.rs"]
mod tests;
