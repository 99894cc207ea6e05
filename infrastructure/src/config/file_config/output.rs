//! Output configuration from TOML (`[output]` section)

use draviz_domain::ChartFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Chart format (uses domain type)
    pub format: Option<ChartFormat>,
    /// Chart file path
    pub path: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the answer progress bar
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            path: None,
            color: true,
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "svg"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(ChartFormat::Svg));
        assert!(config.output.color);
    }
}
