//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Unknown question source: '{0}'")]
    UnsupportedSource(String),

    #[error("Duplicate answer label in legend: '{0}'")]
    DuplicateLegendLabel(String),

    #[error("Duplicate answer code in legend: {0}")]
    DuplicateLegendCode(u8),

    #[error("Answer '{0}' is not one of the legend options")]
    UnknownAnswer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let error = DomainError::UnsupportedLanguage("de".to_string());
        assert_eq!(error.to_string(), "Unknown language: 'de'");
    }

    #[test]
    fn test_duplicate_code_display() {
        let error = DomainError::DuplicateLegendCode(1);
        assert!(error.to_string().contains('1'));
    }
}
