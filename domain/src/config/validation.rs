//! Structured configuration issues.
//!
//! Configuration is checked before an assessment runs. Each problem is
//! reported as a [`ConfigIssue`] with a severity; errors abort, warnings are
//! shown and the run continues.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field holds a value outside its fixed set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A chart dimension is zero or too small to draw.
    InvalidDimension { field: String, value: u32 },
    /// The bundled question directory does not exist.
    MissingDataDir { path: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidDimension {
                field: "chart.width".to_string(),
                value: 0,
            },
            message: "chart.width must be positive".to_string(),
        };
        assert!(issue.is_error());

        let warning = ConfigIssue {
            severity: Severity::Warning,
            ..issue
        };
        assert!(!warning.is_error());
    }
}
