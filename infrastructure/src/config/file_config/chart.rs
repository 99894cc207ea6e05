//! Chart configuration from TOML (`[chart]` section)

use draviz_application::ChartSettings;
use draviz_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Smallest canvas side that still leaves room for the axis labels
pub const MIN_CHART_SIDE: u32 = 200;

/// Largest font size the renderers accept
pub const MAX_FONT_SIZE: u32 = 72;

/// Raw chart configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChartConfig {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl Default for FileChartConfig {
    fn default() -> Self {
        let settings = ChartSettings::default();
        Self {
            width: settings.width,
            height: settings.height,
            font_size: settings.font_size,
        }
    }
}

impl FileChartConfig {
    pub fn to_settings(&self) -> (ChartSettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        for (field, value, min) in [
            ("chart.width", self.width, MIN_CHART_SIDE),
            ("chart.height", self.height, MIN_CHART_SIDE),
            ("chart.font_size", self.font_size, 1),
        ] {
            if value < min {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidDimension {
                        field: field.to_string(),
                        value,
                    },
                    message: format!("{}: {} is below the minimum of {}", field, value, min),
                });
            }
        }

        if self.font_size > MAX_FONT_SIZE {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidDimension {
                    field: "chart.font_size".to_string(),
                    value: self.font_size,
                },
                message: format!(
                    "chart.font_size: {} is above the maximum of {}",
                    self.font_size, MAX_FONT_SIZE
                ),
            });
        }

        let settings = ChartSettings::default()
            .with_size(self.width, self.height)
            .with_font_size(self.font_size);
        (settings, issues)
    }
}
