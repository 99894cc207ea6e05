//! Configuration value objects shared by the outer layers.

pub mod output_format;
pub mod validation;

pub use output_format::ChartFormat;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
