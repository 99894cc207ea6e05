//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assessment;
mod chart;
mod output;

pub use assessment::FileAssessmentConfig;
pub use chart::{FileChartConfig, MAX_FONT_SIZE, MIN_CHART_SIDE};
pub use output::FileOutputConfig;

use draviz_application::AssessmentConfig;
use draviz_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language, question source and data directory
    pub assessment: FileAssessmentConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Chart drawing settings
    pub chart: FileChartConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Enum parse failures (language, source)
    /// 2. Chart dimensions
    /// 3. Existence of the data directory (warning only: it is needed for the default source)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.assessment.parse_language().1);
        issues.extend(self.assessment.parse_source().1);

        // 2. Chart dimensions
        issues.extend(self.chart.to_settings().1);

        // 3. Data directory
        if !Path::new(&self.assessment.data_dir).is_dir() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingDataDir {
                    path: self.assessment.data_dir.clone(),
                },
                message: format!(
                    "assessment.data_dir: '{}' is not a directory; default questions are unavailable",
                    self.assessment.data_dir
                ),
            });
        }

        issues
    }

    /// Convert into the application configuration.
    ///
    /// Values that fail validation are left unset; call [`validate`](Self::validate)
    /// first to report them.
    pub fn to_assessment_config(&self) -> AssessmentConfig {
        AssessmentConfig {
            language: self.assessment.parse_language().0,
            source: self.assessment.parse_source().0,
            data_dir: PathBuf::from(&self.assessment.data_dir),
            output: self.output.path.as_ref().map(PathBuf::from),
            format: self.output.format.unwrap_or_default(),
            chart: self.chart.to_settings().0,
        }
    }
}
