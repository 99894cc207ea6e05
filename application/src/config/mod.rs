//! Application-level configuration.
//!
//! - [`AssessmentConfig`] - preselected choices, data directory and output target
//! - [`ChartSettings`] - canvas and font parameters for chart renderers

pub mod assessment_config;
pub mod chart_settings;

pub use assessment_config::AssessmentConfig;
pub use chart_settings::ChartSettings;
