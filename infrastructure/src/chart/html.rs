//! Standalone HTML page drawing the figure with plotly.js

use super::{ChartRenderer, escape_markup};
use draviz_application::{ChartSettings, ChartSinkError};
use draviz_domain::{ChartFormat, RadarChart};

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, Copy)]
pub struct HtmlChartRenderer {
    settings: ChartSettings,
}

impl HtmlChartRenderer {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }
}

impl ChartRenderer for HtmlChartRenderer {
    fn format(&self) -> ChartFormat {
        ChartFormat::Html
    }

    fn render(&self, chart: &RadarChart) -> Result<String, ChartSinkError> {
        let figure = serde_json::to_string(chart).map_err(|e| ChartSinkError::Encode {
            format: ChartFormat::Html,
            message: e.to_string(),
        })?;
        // keep "</script>" inside labels from closing the script element
        let figure = figure.replace("</", "<\\/");
        let title = escape_markup(chart.title().unwrap_or("Radar chart"));

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{src}"></script>
</head>
<body>
<div id="chart" style="width:{width}px;height:{height}px;"></div>
<script>
const figure = {figure};
Plotly.newPlot("chart", figure.data, figure.layout);
</script>
</body>
</html>
"#,
            title = title,
            src = PLOTLY_SRC,
            width = self.settings.width,
            height = self.settings.height,
            figure = figure,
        ))
    }
}
