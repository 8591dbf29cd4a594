//! Two-slice proportion chart (matched vs unmatched skills) rendered as SVG.
//!
//! Geometry is computed here; markup lives in `templates/chart.svg`.

use std::f64::consts::PI;

use askama::Template;

use crate::errors::AppError;

const MATCHED_COLOR: &str = "#28a745";
const UNMATCHED_COLOR: &str = "#dc3545";
const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 360.0;
const CX: f64 = 160.0;
const CY: f64 = 160.0;
const RADIUS: f64 = 130.0;

#[derive(Template)]
#[template(path = "chart.svg")]
struct ChartTemplate {
    width: f64,
    height: f64,
    cx: f64,
    cy: f64,
    radius: f64,
    slices: Vec<Slice>,
    legend: Vec<LegendItem>,
}

struct Slice {
    /// Takes the whole pie: drawn as a circle, `path` is empty.
    full: bool,
    path: String,
    color: &'static str,
    label_x: String,
    label_y: String,
    label: String,
}

struct LegendItem {
    x: f64,
    swatch_y: String,
    text_x: String,
    text_y: f64,
    color: &'static str,
    label: &'static str,
}

/// Renders the pie chart for a 0 – 100 score. Out-of-range scores are clamped.
pub fn render_chart_svg(score: f64) -> Result<String, AppError> {
    let matched = score.clamp(0.0, 100.0);
    let unmatched = 100.0 - matched;

    // Slices start at 12 o'clock and run clockwise; a 0 % slice is not drawn.
    let slices = [
        (matched, MATCHED_COLOR, 0.0),
        (unmatched, UNMATCHED_COLOR, matched),
    ]
    .into_iter()
    .filter(|(share, _, _)| *share > 0.0)
    .map(|(share, color, offset)| slice(share, color, offset))
    .collect();

    let legend_y = CY + RADIUS + 30.0;
    let legend = [("Matched", MATCHED_COLOR), ("Unmatched", UNMATCHED_COLOR)]
        .into_iter()
        .enumerate()
        .map(|(i, (label, color))| {
            let x = 50.0 + i as f64 * 130.0;
            LegendItem {
                x,
                swatch_y: format!("{:.0}", legend_y - 11.0),
                text_x: format!("{:.0}", x + 20.0),
                text_y: legend_y,
                color,
                label,
            }
        })
        .collect();

    let chart = ChartTemplate {
        width: WIDTH,
        height: HEIGHT,
        cx: CX,
        cy: CY,
        radius: RADIUS,
        slices,
        legend,
    };
    chart
        .render()
        .map_err(|e| AppError::Render(format!("chart render failed: {e}")))
}

fn slice(share: f64, color: &'static str, offset: f64) -> Slice {
    let full = share >= 100.0;
    let path = if full {
        String::new()
    } else {
        let (x1, y1) = point(angle(offset), RADIUS);
        let (x2, y2) = point(angle(offset + share), RADIUS);
        let large_arc = u8::from(share > 50.0);
        format!("M {CX} {CY} L {x1:.2} {y1:.2} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
    };
    let (lx, ly) = point(angle(offset + share / 2.0), RADIUS * 0.6);
    Slice {
        full,
        path,
        color,
        label_x: format!("{lx:.2}"),
        label_y: format!("{ly:.2}"),
        label: format!("{share:.1}%"),
    }
}

/// Percentage of the full turn → radians, measured clockwise from 12 o'clock.
fn angle(percent: f64) -> f64 {
    percent / 100.0 * 2.0 * PI
}

fn point(theta: f64, r: f64) -> (f64, f64) {
    (CX + r * theta.sin(), CY - r * theta.cos())
}
