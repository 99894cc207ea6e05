//! Chart sink port
//!
//! The final step of an assessment hands the chart to a sink that puts it in
//! front of the user (a file on disk, stdout, ...).

use draviz_domain::{ChartFormat, RadarChart};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartSinkError {
    #[error("Failed to encode chart as {format:?}: {message}")]
    Encode { format: ChartFormat, message: String },

    #[error("Failed to write chart to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Where a rendered chart ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartLocation {
    File(PathBuf),
    Stdout,
}

impl std::fmt::Display for ChartLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartLocation::File(path) => write!(f, "{}", path.display()),
            ChartLocation::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Receives the finished chart
pub trait ChartSink: Send + Sync {
    fn format(&self) -> ChartFormat;

    fn show(&self, chart: &RadarChart) -> Result<ChartLocation, ChartSinkError>;
}
