//! Where the questions come from

use super::language::Language;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Question source picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSourceMode {
    /// No questions: nothing is presented
    #[default]
    None,
    /// The bundled question file for the selected language
    Default,
    /// A CSV file supplied by the user
    Upload,
}

impl QuestionSourceMode {
    /// All modes, in the order they are offered to the user
    pub const ALL: [QuestionSourceMode; 3] = [
        QuestionSourceMode::None,
        QuestionSourceMode::Default,
        QuestionSourceMode::Upload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionSourceMode::None => "none",
            QuestionSourceMode::Default => "default",
            QuestionSourceMode::Upload => "upload",
        }
    }
}

impl std::fmt::Display for QuestionSourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionSourceMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(QuestionSourceMode::None),
            "default" | "builtin" | "built-in" => Ok(QuestionSourceMode::Default),
            "upload" | "user" | "file" => Ok(QuestionSourceMode::Upload),
            _ => Err(DomainError::UnsupportedSource(s.to_string())),
        }
    }
}

/// Contents of a user-supplied question file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name as given by the user
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Resolved input for the question presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    None,
    BuiltIn(PathBuf),
    Uploaded(UploadedFile),
}

impl QuestionSource {
    /// Path of the bundled question file for a language: `<data_dir>/defaultq_<code>.csv`
    pub fn default_path(data_dir: &Path, language: Language) -> PathBuf {
        data_dir.join(format!("defaultq_{}.csv", language.code()))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, QuestionSource::None)
    }

    /// Short human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            QuestionSource::None => "none".to_string(),
            QuestionSource::BuiltIn(path) => path.display().to_string(),
            QuestionSource::Uploaded(file) => format!("upload:{}", file.name),
        }
    }
}
