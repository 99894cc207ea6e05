//! Fixed interface strings for each language

use super::language::Language;
use super::source::QuestionSourceMode;

/// Interface text for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStrings {
    pub title: &'static str,
    pub source_prompt: &'static str,
    pub upload_prompt: &'static str,
    mode_none: &'static str,
    mode_default: &'static str,
    mode_upload: &'static str,
}

const ENGLISH: LocaleStrings = LocaleStrings {
    title: "Data Readiness Assessment",
    source_prompt: "Select source of questions",
    upload_prompt: "Upload csv file with questions",
    mode_none: "None",
    mode_default: "Default questions",
    mode_upload: "User-specified questions",
};

const SWEDISH: LocaleStrings = LocaleStrings {
    title: "Bedömning av databeredskap",
    source_prompt: "Välj källa till frågor",
    upload_prompt: "Ladda upp csv-fil med frågor",
    mode_none: "None",
    mode_default: "Standardfrågor",
    mode_upload: "Egna frågor",
};

impl LocaleStrings {
    pub fn for_language(language: Language) -> &'static LocaleStrings {
        match language {
            Language::English => &ENGLISH,
            Language::Swedish => &SWEDISH,
        }
    }

    /// Label of a question source option
    pub fn mode_label(&self, mode: QuestionSourceMode) -> &'static str {
        match mode {
            QuestionSourceMode::None => self.mode_none,
            QuestionSourceMode::Default => self.mode_default,
            QuestionSourceMode::Upload => self.mode_upload,
        }
    }

    /// Source options as `(mode, label)` in display order
    pub fn mode_options(&self) -> [(QuestionSourceMode, &'static str); 3] {
        QuestionSourceMode::ALL.map(|m| (m, self.mode_label(m)))
    }
}
