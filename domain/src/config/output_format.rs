//! Chart output format value object

use serde::{Deserialize, Serialize};

/// File format the chart is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    /// Standalone HTML page rendering the figure with plotly.js (default)
    #[default]
    Html,
    /// Self-contained SVG drawing
    Svg,
    /// The plotly figure as JSON
    Json,
}

impl ChartFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Html => "html",
            ChartFormat::Svg => "svg",
            ChartFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Some(ChartFormat::Html),
            "svg" => Some(ChartFormat::Svg),
            "json" => Some(ChartFormat::Json),
            _ => None,
        }
    }
}
