//! Self-contained SVG drawing of the radar chart
//!
//! Layout follows the figure: category axis clockwise from north, one ring
//! per labeled radial tick, the trace as a filled closed polygon with one
//! marker per point. Hover text is carried by `<title>` elements.

use super::{ChartRenderer, escape_markup};
use draviz_application::{ChartSettings, ChartSinkError};
use draviz_domain::chart::radar::{Direction, Fill};
use draviz_domain::{ChartFormat, RadarChart};
use std::f64::consts::PI;
use std::fmt::Write;

const FILL_COLOR: &str = "#636efa";
const GRID_COLOR: &str = "#d0d4dc";
const TEXT_COLOR: &str = "#2a3f5f";

#[derive(Debug, Clone, Copy)]
pub struct SvgChartRenderer {
    settings: ChartSettings,
}

/// Canvas geometry derived from the settings
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl SvgChartRenderer {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    fn frame(&self, titled: bool, font_size: u32) -> Frame {
        let font = f64::from(font_size);
        let top = if titled { font * 3.0 } else { 0.0 };
        let width = f64::from(self.settings.width);
        let height = f64::from(self.settings.height) - top;
        // room for category labels around the circle
        let margin = font * 6.0;
        Frame {
            cx: width / 2.0,
            cy: top + height / 2.0,
            radius: (width.min(height) / 2.0 - margin).max(font),
        }
    }

    /// Point at `value` (in radial units) on category `index` of `count`
    fn position(
        frame: Frame,
        direction: Direction,
        index: usize,
        count: usize,
        value: f64,
        max: f64,
    ) -> (f64, f64) {
        let step = 2.0 * PI / count.max(1) as f64;
        let angle = match direction {
            Direction::Clockwise => step * index as f64,
            Direction::Counterclockwise => -step * index as f64,
        };
        let r = if max > 0.0 { frame.radius * value / max } else { 0.0 };
        (frame.cx + r * angle.sin(), frame.cy - r * angle.cos())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn format(&self) -> ChartFormat {
        ChartFormat::Svg
    }

    fn render(&self, chart: &RadarChart) -> Result<String, ChartSinkError> {
        self.draw(chart).map_err(|e| ChartSinkError::Encode {
            format: ChartFormat::Svg,
            message: e.to_string(),
        })
    }
}

impl SvgChartRenderer {
    fn draw(&self, chart: &RadarChart) -> Result<String, std::fmt::Error> {
        let font_size = chart.layout.font.size;
        let frame = self.frame(chart.title().is_some(), font_size);
        let axis = chart.radial_axis();
        let direction = chart.layout.polar.angularaxis.direction;
        let max = f64::from(axis.max());
        let trace = chart.trace();
        let count = trace.len();

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="{f}">"#,
            w = self.settings.width,
            h = self.settings.height,
            f = font_size
        )?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        if let Some(title) = chart.title() {
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{}" fill="{}">{}</text>"#,
                frame.cx,
                f64::from(font_size) * 2.0,
                font_size.saturating_add(6),
                TEXT_COLOR,
                escape_markup(title)
            )?;
        }

        // radial grid
        if axis.visible {
            writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}"/>"#,
                frame.cx, frame.cy, frame.radius, GRID_COLOR
            )?;
            for (value, text) in axis.labeled_ticks() {
                let r = frame.radius * f64::from(value) / max.max(1.0);
                if value > 0 {
                    writeln!(
                        svg,
                        r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}"/>"#,
                        frame.cx, frame.cy, r, GRID_COLOR
                    )?;
                }
                writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" fill="{}">{}</text>"#,
                    frame.cx + 4.0,
                    frame.cy - r - 2.0,
                    TEXT_COLOR,
                    escape_markup(text)
                )?;
            }
        }

        // category spokes and labels
        for (index, label) in trace.theta.iter().enumerate() {
            let (x, y) = Self::position(frame, direction, index, count, max, max);
            writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}"/>"#,
                frame.cx, frame.cy, x, y, GRID_COLOR
            )?;
            let (lx, ly) = Self::position(frame, direction, index, count, max * 1.12, max);
            let anchor = if (lx - frame.cx).abs() < 1.0 {
                "middle"
            } else if lx > frame.cx {
                "start"
            } else {
                "end"
            };
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="{}" dominant-baseline="middle" fill="{}">{}</text>"#,
                lx,
                ly,
                anchor,
                TEXT_COLOR,
                escape_markup(label)
            )?;
        }

        // data trace
        let points: Vec<(f64, f64)> = trace
            .r
            .iter()
            .enumerate()
            .map(|(index, code)| Self::position(frame, direction, index, count, f64::from(*code), max))
            .collect();

        if points.len() > 1 {
            let coords = points
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            let fill = match trace.fill {
                Fill::Toself => FILL_COLOR,
                Fill::None => "none",
            };
            writeln!(
                svg,
                r#"<polygon points="{}" fill="{}" fill-opacity="0.5" stroke="{}" stroke-width="2"/>"#,
                coords, fill, FILL_COLOR
            )?;
        }

        for ((x, y), text) in points.iter().zip(&trace.text) {
            writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"><title>{}</title></circle>"#,
                x,
                y,
                FILL_COLOR,
                escape_markup(text)
            )?;
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_domain::{AnswerLegend, AnswerSet, Language, NOT_RELEVANT};

    fn chart(answers: &[(&str, u8)]) -> RadarChart {
        let mut set = AnswerSet::new();
        for (label, code) in answers {
            set.record(*label, *code);
        }
        RadarChart::from_answers(&set, &AnswerLegend::for_language(Language::English))
    }

    fn render(chart: &RadarChart) -> String {
        SvgChartRenderer::new(ChartSettings::default()).render(chart).unwrap()
    }

    #[test]
    fn test_document_shape() {
        let svg = render(&chart(&[("1. Data", 3)]));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"700\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_only_tick_labels_with_rings_are_drawn() {
        let svg = render(&chart(&[]));
        for label in ["Don&#39;t know", "No", "Partially", "Yes"] {
            assert!(svg.contains(&format!(">{}</text>", label)), "missing {}", label);
        }
        assert!(!svg.contains("Not relevant"));
    }

    #[test]
    fn test_single_point_has_marker_without_polygon() {
        let svg = render(&chart(&[("1. Data", 3)]));
        assert!(!svg.contains("<polygon"));
        assert_eq!(svg.matches("<title>1. Data</title>").count(), 1);
    }

    #[test]
    fn test_first_point_is_north_of_center() {
        let renderer = SvgChartRenderer::new(ChartSettings::default());
        let frame = renderer.frame(false, 12);
        let (x, y) = SvgChartRenderer::position(frame, Direction::Clockwise, 0, 4, 3.0, 3.0);
        assert!((x - frame.cx).abs() < 1e-9);
        assert!((y - (frame.cy - frame.radius)).abs() < 1e-9);
        // second of four categories lies east when clockwise
        let (x, _) = SvgChartRenderer::position(frame, Direction::Clockwise, 1, 4, 3.0, 3.0);
        assert!(x > frame.cx);
    }

    #[test]
    fn test_polygon_and_markers_for_relevant_points() {
        let svg = render(&chart(&[
            ("1. Data", 3),
            ("2. Legal", NOT_RELEVANT),
            ("3. Access", 1),
            ("4. Quality", 0),
        ]));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches("r=\"4\"").count(), 3);
        assert!(!svg.contains("2. Legal"));
    }

    #[test]
    fn test_zero_code_sits_at_center() {
        let renderer = SvgChartRenderer::new(ChartSettings::default());
        let frame = renderer.frame(false, 12);
        let (x, y) = SvgChartRenderer::position(frame, Direction::Clockwise, 2, 3, 0.0, 3.0);
        assert!((x - frame.cx).abs() < 1e-9 && (y - frame.cy).abs() < 1e-9);
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = render(&chart(&[("1. R&D", 2), ("2. <Ops>", 1)]));
        assert!(svg.contains("1. R&amp;D"));
        assert!(svg.contains("2. &lt;Ops&gt;"));
    }

    #[test]
    fn test_title_is_drawn() {
        let svg = render(&chart(&[]).with_title("Data Readiness Assessment"));
        assert!(svg.contains(">Data Readiness Assessment</text>"));
    }

    #[test]
    fn test_oversized_font_does_not_overflow() {
        let chart = chart(&[("1. Data", 3), ("2. Owner", 1)])
            .with_title("Data Readiness Assessment")
            .with_font_size(u32::MAX);
        let svg = render(&chart);
        assert!(svg.contains(&format!("font-size=\"{}\"", u32::MAX)));
        assert!(svg.contains("Data Readiness Assessment"));
    }
}
