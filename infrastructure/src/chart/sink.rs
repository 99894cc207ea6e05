//! Chart sinks: write the rendered chart to a file or stdout

use super::{ChartRenderer, renderer_for};
use draviz_application::{ChartLocation, ChartSettings, ChartSink, ChartSinkError};
use draviz_domain::{ChartFormat, RadarChart};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Writes the chart to a file, creating parent directories
pub struct FileChartSink {
    renderer: Box<dyn ChartRenderer>,
    path: PathBuf,
}

impl FileChartSink {
    pub fn new(renderer: Box<dyn ChartRenderer>, path: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartSink for FileChartSink {
    fn format(&self) -> ChartFormat {
        self.renderer.format()
    }

    fn show(&self, chart: &RadarChart) -> Result<ChartLocation, ChartSinkError> {
        let content = self.renderer.render(chart)?;
        let io_error = |source: std::io::Error| ChartSinkError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(&self.path, content).map_err(io_error)?;

        info!("Chart written to {}", self.path.display());
        Ok(ChartLocation::File(self.path.clone()))
    }
}

/// Prints the chart on stdout
pub struct StdoutChartSink {
    renderer: Box<dyn ChartRenderer>,
}

impl StdoutChartSink {
    pub fn new(renderer: Box<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }
}

impl ChartSink for StdoutChartSink {
    fn format(&self) -> ChartFormat {
        self.renderer.format()
    }

    fn show(&self, chart: &RadarChart) -> Result<ChartLocation, ChartSinkError> {
        let content = self.renderer.render(chart)?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| ChartSinkError::Io {
                path: "<stdout>".to_string(),
                source,
            })?;
        Ok(ChartLocation::Stdout)
    }
}

/// Sink for a format and target path; `-` selects stdout
pub fn chart_sink_for(format: ChartFormat, settings: ChartSettings, path: &Path) -> Arc<dyn ChartSink> {
    let renderer = renderer_for(format, settings);
    if path == Path::new("-") {
        Arc::new(StdoutChartSink::new(renderer))
    } else {
        Arc::new(FileChartSink::new(renderer, path))
    }
}
