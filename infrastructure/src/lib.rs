//! Infrastructure layer for draviz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod chart;
pub mod config;
pub mod questions;

// Re-export commonly used types
pub use chart::{
    ChartRenderer, FileChartSink, HtmlChartRenderer, JsonChartRenderer, StdoutChartSink,
    SvgChartRenderer, chart_sink_for, renderer_for,
};
pub use config::{
    ConfigLoader, FileAssessmentConfig, FileChartConfig, FileConfig, FileOutputConfig,
};
pub use questions::CsvQuestionReader;
