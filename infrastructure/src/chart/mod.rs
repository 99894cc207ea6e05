//! Chart renderers and sinks
//!
//! A [`ChartRenderer`] encodes a [`RadarChart`] as text in one
//! [`ChartFormat`]; a sink ([`FileChartSink`], [`StdoutChartSink`]) puts the
//! encoded chart somewhere.

mod html;
mod json;
mod sink;
mod svg;

pub use html::HtmlChartRenderer;
pub use json::JsonChartRenderer;
pub use sink::{FileChartSink, StdoutChartSink, chart_sink_for};
pub use svg::SvgChartRenderer;

use draviz_application::{ChartSettings, ChartSinkError};
use draviz_domain::{ChartFormat, RadarChart};

/// Encodes a chart in one format
pub trait ChartRenderer: Send + Sync {
    fn format(&self) -> ChartFormat;

    fn render(&self, chart: &RadarChart) -> Result<String, ChartSinkError>;
}

/// Renderer for a format
pub fn renderer_for(format: ChartFormat, settings: ChartSettings) -> Box<dyn ChartRenderer> {
    match format {
        ChartFormat::Html => Box::new(HtmlChartRenderer::new(settings)),
        ChartFormat::Svg => Box::new(SvgChartRenderer::new(settings)),
        ChartFormat::Json => Box::new(JsonChartRenderer),
    }
}

/// Escape text for XML/HTML content and attribute values
pub(crate) fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
