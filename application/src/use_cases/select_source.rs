//! Select Source use case.
//!
//! Resolves the language and question source of an assessment, asking the
//! user for whatever was not preselected.

use crate::ports::choice_prompt::{ChoicePrompt, PromptError};
use draviz_domain::{
    AnswerLegend, DomainError, Language, LocaleStrings, QuestionSource, QuestionSourceMode,
    UploadedFile,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while selecting the question source.
#[derive(Error, Debug)]
pub enum SelectSourceError {
    #[error(transparent)]
    Configuration(#[from] DomainError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

/// Input for [`SelectSourceUseCase`]. `None` fields are asked interactively.
#[derive(Debug, Clone, Default)]
pub struct SelectSourceInput {
    pub language: Option<Language>,
    pub mode: Option<QuestionSourceMode>,
    /// Upload to use when the mode is [`QuestionSourceMode::Upload`]
    pub upload: Option<UploadedFile>,
}

impl SelectSourceInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_mode(mut self, mode: QuestionSourceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_upload(mut self, upload: UploadedFile) -> Self {
        self.upload = Some(upload);
        self
    }
}

/// Resolved selection: everything the presenter and renderer need
#[derive(Debug, Clone)]
pub struct SourceSelection {
    pub language: Language,
    pub legend: AnswerLegend,
    pub strings: &'static LocaleStrings,
    pub mode: QuestionSourceMode,
    pub source: QuestionSource,
}

impl SourceSelection {
    pub fn title(&self) -> &'static str {
        self.strings.title
    }
}

/// Use case for the language and question source choice.
pub struct SelectSourceUseCase {
    data_dir: PathBuf,
}

impl SelectSourceUseCase {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Parse a language code, failing on anything but `en` / `sv`
    pub fn resolve_language(code: &str) -> Result<Language, SelectSourceError> {
        Ok(code.parse::<Language>()?)
    }

    /// Resolve the source for a language and mode without prompting.
    ///
    /// Upload mode without a file resolves to [`QuestionSource::None`].
    pub fn resolve_source(
        &self,
        language: Language,
        mode: QuestionSourceMode,
        upload: Option<UploadedFile>,
    ) -> QuestionSource {
        match mode {
            QuestionSourceMode::None => QuestionSource::None,
            QuestionSourceMode::Default => {
                QuestionSource::BuiltIn(QuestionSource::default_path(&self.data_dir, language))
            }
            QuestionSourceMode::Upload => upload.map_or(QuestionSource::None, QuestionSource::Uploaded),
        }
    }

    /// Run the selection, asking `prompt` for missing choices.
    pub fn execute(
        &self,
        input: SelectSourceInput,
        prompt: &dyn ChoicePrompt,
    ) -> Result<SourceSelection, SelectSourceError> {
        let language = match input.language {
            Some(language) => language,
            None => {
                let options: Vec<String> = Language::ALL
                    .iter()
                    .map(|l| l.display_name().to_string())
                    .collect();
                pick(&Language::ALL, prompt.choose("Language", &options)?)?
            }
        };
        debug!("Language: {}", language);

        let strings = LocaleStrings::for_language(language);
        let mode = match input.mode {
            Some(mode) => mode,
            None => {
                let options: Vec<String> = strings
                    .mode_options()
                    .iter()
                    .map(|(_, label)| label.to_string())
                    .collect();
                pick(&QuestionSourceMode::ALL, prompt.choose(strings.source_prompt, &options)?)?
            }
        };

        let upload = match (mode, input.upload) {
            (QuestionSourceMode::Upload, None) => prompt.request_upload(strings.upload_prompt)?,
            (_, upload) => upload,
        };

        let source = self.resolve_source(language, mode, upload);
        info!("Question source: {} ({})", mode, source.describe());

        Ok(SourceSelection {
            language,
            legend: AnswerLegend::for_language(language),
            strings,
            mode,
            source,
        })
    }
}

fn pick<T: Copy>(items: &[T], index: usize) -> Result<T, PromptError> {
    items
        .get(index)
        .copied()
        .ok_or_else(|| PromptError::InvalidInput(format!("option {} out of range", index)))
}
