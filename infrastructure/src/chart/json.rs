//! Plotly figure JSON

use super::ChartRenderer;
use draviz_application::ChartSinkError;
use draviz_domain::{ChartFormat, RadarChart};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonChartRenderer;

impl ChartRenderer for JsonChartRenderer {
    fn format(&self) -> ChartFormat {
        ChartFormat::Json
    }

    fn render(&self, chart: &RadarChart) -> Result<String, ChartSinkError> {
        serde_json::to_string_pretty(chart).map_err(|e| ChartSinkError::Encode {
            format: ChartFormat::Json,
            message: e.to_string(),
        })
    }
}
