//! Configuration file loading for draviz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DRAVIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./draviz.toml` or `./.draviz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/draviz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAssessmentConfig, FileChartConfig, FileConfig, FileOutputConfig, MAX_FONT_SIZE,
    MIN_CHART_SIDE,
};
pub use loader::ConfigLoader;
