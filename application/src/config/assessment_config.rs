//! Assessment run configuration.

use super::chart_settings::ChartSettings;
use draviz_domain::{ChartFormat, Language, QuestionSourceMode};
use std::path::PathBuf;

/// Everything a run needs to know up front.
///
/// `language` and `source` are optional: when unset the user is asked.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// Preselected language
    pub language: Option<Language>,
    /// Preselected question source
    pub source: Option<QuestionSourceMode>,
    /// Directory holding `defaultq_<lang>.csv`
    pub data_dir: PathBuf,
    /// Where the chart is written; `None` derives `radar.<ext>`
    pub output: Option<PathBuf>,
    pub format: ChartFormat,
    pub chart: ChartSettings,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            language: None,
            source: None,
            data_dir: PathBuf::from("data"),
            output: None,
            format: ChartFormat::default(),
            chart: ChartSettings::default(),
        }
    }
}

impl AssessmentConfig {
    /// Output path, falling back to `radar.<format extension>`
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("radar.{}", self.format.extension())))
    }
}
