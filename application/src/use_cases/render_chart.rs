//! Render Chart use case.
//!
//! Builds the radar chart from collected answers and hands it to a
//! [`ChartSink`].

use crate::ports::chart_sink::{ChartLocation, ChartSink, ChartSinkError};
use draviz_domain::{AnswerLegend, AnswerSet, NOT_RELEVANT, RadarChart};
use std::sync::Arc;
use tracing::info;

/// Result of [`RenderChartUseCase::execute`]
#[derive(Debug, Clone)]
pub struct RenderChartOutput {
    pub chart: RadarChart,
    pub location: ChartLocation,
}

pub struct RenderChartUseCase {
    sink: Arc<dyn ChartSink>,
    font_size: u32,
}

impl RenderChartUseCase {
    pub fn new(sink: Arc<dyn ChartSink>) -> Self {
        Self {
            sink,
            font_size: RadarChart::DEFAULT_FONT_SIZE,
        }
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Chart for `answers`, without showing it
    pub fn build(&self, answers: &AnswerSet, legend: &AnswerLegend, title: &str) -> RadarChart {
        RadarChart::from_answers(answers, legend)
            .with_title(title)
            .with_font_size(self.font_size)
    }

    pub fn execute(
        &self,
        answers: &AnswerSet,
        legend: &AnswerLegend,
        title: &str,
    ) -> Result<RenderChartOutput, ChartSinkError> {
        let chart = self.build(answers, legend, title);
        let skipped = answers.iter().filter(|e| e.code == NOT_RELEVANT).count();
        info!(
            "Rendering {} points as {:?} ({} not relevant)",
            chart.trace().len(),
            self.sink.format(),
            skipped
        );

        let location = self.sink.show(&chart)?;
        Ok(RenderChartOutput { chart, location })
    }
}
