//! Display artifacts for one analysis: radar chart SVG, JSON dump, adore
//! metric and the theme panel. Pure presentation, no business logic.

use crate::adore::adore_display;
use crate::emotion::EmotionScores;
use crate::radar::{to_radar_series, RadarSeries};
use crate::themes::ThemeList;
use serde::Serialize;
use std::fmt::Write as _;

const CHART_SIZE: f64 = 420.0;
const CHART_RADIUS: f64 = 150.0;
const GRID_RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

const PANEL_BG: &str = "#262730";
const GRID_COLOR: &str = "#333";
const AXIS_TEXT: &str = "#666";
const SERIES_LINE: &str = "#FF4B4B";
const SERIES_FILL: &str = "rgba(255, 75, 75, 0.1)";
const TEXT_COLOR: &str = "#FAFAFA";

#[derive(Debug, Clone, Serialize)]
pub struct RenderedView {
    pub radar_svg: String,
    pub scores_json: String,
    pub adore_display: String,
    pub themes: ThemeList,
}

/// Escape text for inclusion in HTML or SVG markup.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render(scores: &EmotionScores, adore: f32, themes: &ThemeList) -> RenderedView {
    let scores_json = match scores.to_json_pretty() {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize emotion scores: {}", e);
            "{}".to_string()
        }
    };

    RenderedView {
        radar_svg: radar_svg(&to_radar_series(scores)),
        scores_json,
        adore_display: adore_display(adore),
        themes: themes.clone(),
    }
}

/// Placeholder chart shown before the first analysis or for empty scores.
pub fn placeholder_svg() -> String {
    let mut svg = String::new();
    open_svg(&mut svg);
    let c = CHART_SIZE / 2.0;
    let _ = writeln!(
        svg,
        "  <text x='{c:.0}' y='{c:.0}' fill='{AXIS_TEXT}' font-family='sans-serif' font-size='16' text-anchor='middle'>No emotion data</text>"
    );
    svg.push_str("</svg>\n");
    svg
}

fn open_svg(svg: &mut String) {
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{CHART_SIZE:.0}' height='{CHART_SIZE:.0}' viewBox='0 0 {CHART_SIZE:.0} {CHART_SIZE:.0}' role='img'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{CHART_SIZE:.0}' height='{CHART_SIZE:.0}' rx='4' fill='{PANEL_BG}'/>"
    );
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn radar_svg(series: &RadarSeries) -> String {
    if series.is_empty() {
        return placeholder_svg();
    }

    let c = CHART_SIZE / 2.0;
    let n = series.len();
    let mut svg = String::new();
    open_svg(&mut svg);

    // Grid rings as polygons through each axis, like a polar grid.
    for ring in GRID_RINGS {
        let ring_points: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let a = series.axis_angle(i);
                let r = CHART_RADIUS * ring;
                (c + r * a.cos(), c + r * a.sin())
            })
            .collect();
        let _ = writeln!(
            svg,
            "  <polygon points='{}' fill='none' stroke='{GRID_COLOR}' stroke-width='1'/>",
            points_attr(&ring_points)
        );
    }

    for (i, point) in series.points().iter().enumerate() {
        let a = series.axis_angle(i);
        let (x, y) = (c + CHART_RADIUS * a.cos(), c + CHART_RADIUS * a.sin());
        let _ = writeln!(
            svg,
            "  <line x1='{c:.1}' y1='{c:.1}' x2='{x:.1}' y2='{y:.1}' stroke='{GRID_COLOR}' stroke-width='1'/>"
        );
        let (lx, ly) = (
            c + (CHART_RADIUS + 22.0) * a.cos(),
            c + (CHART_RADIUS + 22.0) * a.sin(),
        );
        let _ = writeln!(
            svg,
            "  <text x='{lx:.1}' y='{ly:.1}' fill='{AXIS_TEXT}' font-family='sans-serif' font-size='13' text-anchor='middle' dominant-baseline='middle'>{}</text>",
            escape_text(&point.label)
        );
    }

    let vertices = series.vertices(c, c, CHART_RADIUS);
    let _ = writeln!(
        svg,
        "  <polygon class='series' points='{}' fill='{SERIES_FILL}' stroke='{SERIES_LINE}' stroke-width='2'/>",
        points_attr(&vertices)
    );
    for ((x, y), point) in vertices.iter().zip(series.points()) {
        let _ = writeln!(
            svg,
            "  <circle cx='{x:.1}' cy='{y:.1}' r='3' fill='{SERIES_LINE}'><title>{}: {:.2}</title></circle>",
            escape_text(&point.label),
            point.value
        );
    }
    let _ = writeln!(
        svg,
        "  <text x='12' y='20' fill='{TEXT_COLOR}' font-family='sans-serif' font-size='12'>Emotions</text>"
    );

    svg.push_str("</svg>\n");
    svg
}
