//! Supported interface languages

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of the questionnaire (Value Object)
///
/// Only English and Swedish are wired up. Anything else is rejected by
/// [`FromStr`] instead of falling back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sv")]
    Swedish,
}

impl Language {
    /// All supported languages, in the order they are offered to the user
    pub const ALL: [Language; 2] = [Language::English, Language::Swedish];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }

    /// Name of the language written in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Swedish => "Svenska",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::English),
            "sv" => Ok(Language::Swedish),
            other => Err(DomainError::UnsupportedLanguage(other.to_string())),
        }
    }
}
