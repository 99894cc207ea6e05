//! Assessment configuration from TOML (`[assessment]` section)

use draviz_domain::{ConfigIssue, ConfigIssueCode, Language, QuestionSourceMode, Severity};
use serde::{Deserialize, Serialize};

/// Raw assessment configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssessmentConfig {
    /// Preselected language code ("en" or "sv")
    pub language: Option<String>,
    /// Preselected question source ("none", "default", "upload")
    pub source: Option<String>,
    /// Directory of the bundled `defaultq_<lang>.csv` files
    pub data_dir: String,
}

impl Default for FileAssessmentConfig {
    fn default() -> Self {
        Self {
            language: None,
            source: None,
            data_dir: "data".to_string(),
        }
    }
}

impl FileAssessmentConfig {
    /// Parse the language, returning the value and any issue found
    pub fn parse_language(&self) -> (Option<Language>, Vec<ConfigIssue>) {
        match self.language.as_deref() {
            None => (None, vec![]),
            Some(code) => match code.parse::<Language>() {
                Ok(language) => (Some(language), vec![]),
                Err(err) => (
                    None,
                    vec![ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::InvalidEnumValue {
                            field: "assessment.language".to_string(),
                            value: code.to_string(),
                            valid_values: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
                        },
                        message: format!("assessment.language: {}", err),
                    }],
                ),
            },
        }
    }

    /// Parse the question source, returning the value and any issue found
    pub fn parse_source(&self) -> (Option<QuestionSourceMode>, Vec<ConfigIssue>) {
        match self.source.as_deref() {
            None => (None, vec![]),
            Some(value) => match value.parse::<QuestionSourceMode>() {
                Ok(mode) => (Some(mode), vec![]),
                Err(err) => (
                    None,
                    vec![ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::InvalidEnumValue {
                            field: "assessment.source".to_string(),
                            value: value.to_string(),
                            valid_values: QuestionSourceMode::ALL
                                .iter()
                                .map(|m| m.as_str().to_string())
                                .collect(),
                        },
                        message: format!("assessment.source: {}", err),
                    }],
                ),
            },
        }
    }
}
