//! Assessment Step use case.
//!
//! A request/response form of the assessment: a caller sends everything
//! chosen so far as an [`AssessmentState`] and gets back the next
//! [`AssessmentView`] to show. The handler keeps no state between calls;
//! the same state always yields the same view.
//!
//! # Flow
//!
//! ```text
//! {}                                   -> choose_language
//! {language}                           -> choose_source
//! {language, source: "upload"}         -> await_upload
//! {language, source, answers: [..k]}   -> ask_question (k+1)
//! {language, source, answers: [..n]}   -> complete (answers + chart)
//! ```

use super::select_source::SelectSourceUseCase;
use crate::ports::question_reader::{QuestionReadError, QuestionReader};
use draviz_domain::{
    AnswerLegend, AnswerSet, DomainError, Language, LocaleStrings, QuestionSource,
    QuestionSourceMode, QuestionTableError, RadarChart, UploadedFile,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while computing the next view.
#[derive(Error, Debug)]
pub enum AssessmentStepError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Read(#[from] QuestionReadError),

    #[error(transparent)]
    Table(QuestionTableError),

    #[error("{given} answers given for {total} questions")]
    TooManyAnswers { given: usize, total: usize },
}

/// A question file sent inline with the state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpload {
    pub name: String,
    /// CSV text of the file
    pub csv: String,
}

/// Everything the user has chosen so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentState {
    /// Language code (`en` / `sv`)
    pub language: Option<String>,
    pub source: Option<QuestionSourceMode>,
    pub upload: Option<StateUpload>,
    /// Picked answer labels, in question order
    pub answers: Vec<String>,
}

/// One selectable option: `value` goes back into the state, `label` is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOption {
    pub value: String,
    pub label: String,
}

impl ViewOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// What to show next
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum AssessmentView {
    ChooseLanguage {
        options: Vec<ViewOption>,
    },
    ChooseSource {
        title: String,
        prompt: String,
        options: Vec<ViewOption>,
    },
    AwaitUpload {
        title: String,
        prompt: String,
    },
    NoQuestions {
        title: String,
    },
    InvalidQuestionFile {
        title: String,
        message: String,
    },
    AskQuestion {
        title: String,
        /// Zero-based position of the question
        index: usize,
        total: usize,
        prompt: String,
        label: String,
        options: Vec<ViewOption>,
    },
    Complete {
        title: String,
        answers: AnswerSet,
        chart: RadarChart,
    },
}

impl AssessmentView {
    /// Name of the view as serialized in the `view` tag
    pub fn name(&self) -> &'static str {
        match self {
            AssessmentView::ChooseLanguage { .. } => "choose_language",
            AssessmentView::ChooseSource { .. } => "choose_source",
            AssessmentView::AwaitUpload { .. } => "await_upload",
            AssessmentView::NoQuestions { .. } => "no_questions",
            AssessmentView::InvalidQuestionFile { .. } => "invalid_question_file",
            AssessmentView::AskQuestion { .. } => "ask_question",
            AssessmentView::Complete { .. } => "complete",
        }
    }
}

/// Use case computing the next view from a state.
pub struct AssessmentStepUseCase {
    selector: SelectSourceUseCase,
    reader: Arc<dyn QuestionReader>,
    font_size: u32,
}

impl AssessmentStepUseCase {
    pub fn new(selector: SelectSourceUseCase, reader: Arc<dyn QuestionReader>) -> Self {
        Self {
            selector,
            reader,
            font_size: RadarChart::DEFAULT_FONT_SIZE,
        }
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn step(&self, state: &AssessmentState) -> Result<AssessmentView, AssessmentStepError> {
        let Some(code) = state.language.as_deref() else {
            return Ok(AssessmentView::ChooseLanguage {
                options: Language::ALL
                    .iter()
                    .map(|l| ViewOption::new(l.code(), l.display_name()))
                    .collect(),
            });
        };
        let language: Language = code.parse()?;
        let strings = LocaleStrings::for_language(language);
        let title = strings.title.to_string();

        let Some(mode) = state.source else {
            return Ok(AssessmentView::ChooseSource {
                title,
                prompt: strings.source_prompt.to_string(),
                options: strings
                    .mode_options()
                    .iter()
                    .map(|(mode, label)| ViewOption::new(mode.as_str(), *label))
                    .collect(),
            });
        };

        let upload = state
            .upload
            .as_ref()
            .map(|u| UploadedFile::new(u.name.clone(), u.csv.clone().into_bytes()));
        let source = self.selector.resolve_source(language, mode, upload);
        if source.is_none() {
            return Ok(match mode {
                QuestionSourceMode::Upload => AssessmentView::AwaitUpload {
                    title,
                    prompt: strings.upload_prompt.to_string(),
                },
                _ => AssessmentView::NoQuestions { title },
            });
        }

        self.question_view(language, &source, &state.answers, title)
    }

    fn question_view(
        &self,
        language: Language,
        source: &QuestionSource,
        selections: &[String],
        title: String,
    ) -> Result<AssessmentView, AssessmentStepError> {
        let table = self.reader.read_table(source)?;
        let questions = match table.questions() {
            Ok(questions) => questions,
            Err(err) if err.is_missing_field() => {
                return Ok(AssessmentView::InvalidQuestionFile {
                    title,
                    message: err.user_message(),
                });
            }
            Err(err) => return Err(AssessmentStepError::Table(err)),
        };

        let total = questions.len();
        if selections.len() > total {
            return Err(AssessmentStepError::TooManyAnswers {
                given: selections.len(),
                total,
            });
        }

        let legend = AnswerLegend::for_language(language);
        let answers = AnswerSet::from_selections(&questions, &legend, selections)?;
        debug!("Step: {}/{} answered", answers.len(), total);

        match questions.get(selections.len()) {
            Some(question) => Ok(AssessmentView::AskQuestion {
                title,
                index: selections.len(),
                total,
                prompt: question.prompt(),
                label: question.label(),
                options: legend
                    .labels()
                    .map(|label| ViewOption::new(label, label))
                    .collect(),
            }),
            None => {
                let chart = RadarChart::from_answers(&answers, &legend)
                    .with_title(title.clone())
                    .with_font_size(self.font_size);
                Ok(AssessmentView::Complete {
                    title,
                    answers,
                    chart,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_domain::QuestionTable;

    /// Reader parsing "a,b,c|1,x,y|..." style uploads; built-in files hold one question.
    struct InlineReader;

    impl QuestionReader for InlineReader {
        fn read_table(&self, source: &QuestionSource) -> Result<QuestionTable, QuestionReadError> {
            let text = match source {
                QuestionSource::BuiltIn(_) => {
                    "question_id,shorthand,question_text|1,Data,Is data available?".to_string()
                }
                QuestionSource::Uploaded(file) => String::from_utf8_lossy(&file.content).into_owned(),
                QuestionSource::None => return Err(QuestionReadError::NoSource),
            };
            let mut lines = text.split('|');
            let columns = lines
                .next()
                .unwrap_or("")
                .split(',')
                .map(str::to_string)
                .collect();
            let rows = lines
                .map(|l| l.split(',').map(str::to_string).collect())
                .collect();
            Ok(QuestionTable::new(columns, rows))
        }
    }

    fn use_case() -> AssessmentStepUseCase {
        AssessmentStepUseCase::new(SelectSourceUseCase::new("data"), Arc::new(InlineReader))
    }

    fn state(language: &str, source: QuestionSourceMode, answers: &[&str]) -> AssessmentState {
        AssessmentState {
            language: Some(language.to_string()),
            source: Some(source),
            upload: None,
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_state_asks_language() {
        let view = use_case().step(&AssessmentState::default()).unwrap();
        assert_eq!(
            view,
            AssessmentView::ChooseLanguage {
                options: vec![
                    ViewOption::new("en", "English"),
                    ViewOption::new("sv", "Svenska")
                ]
            }
        );
    }

    #[test]
    fn test_language_only_asks_source() {
        let view = use_case()
            .step(&AssessmentState {
                language: Some("sv".to_string()),
                ..Default::default()
            })
            .unwrap();
        match view {
            AssessmentView::ChooseSource { title, prompt, options } => {
                assert_eq!(title, "Bedömning av databeredskap");
                assert_eq!(prompt, "Välj källa till frågor");
                assert_eq!(options[1], ViewOption::new("default", "Standardfrågor"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_language_fails_fast() {
        let err = use_case()
            .step(&AssessmentState {
                language: Some("no".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentStepError::Domain(DomainError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_none_source() {
        let view = use_case().step(&state("en", QuestionSourceMode::None, &[])).unwrap();
        assert_eq!(view.name(), "no_questions");
    }

    #[test]
    fn test_upload_without_file_awaits_upload() {
        let view = use_case().step(&state("en", QuestionSourceMode::Upload, &[])).unwrap();
        assert_eq!(
            view,
            AssessmentView::AwaitUpload {
                title: "Data Readiness Assessment".to_string(),
                prompt: "Upload csv file with questions".to_string(),
            }
        );
    }

    #[test]
    fn test_first_question_view() {
        let view = use_case().step(&state("en", QuestionSourceMode::Default, &[])).unwrap();
        match view {
            AssessmentView::AskQuestion {
                index, total, prompt, label, options, ..
            } => {
                assert_eq!((index, total), (0, 1));
                assert_eq!(prompt, "1. Is data available?");
                assert_eq!(label, "1. Data");
                assert_eq!(options.len(), 5);
                assert_eq!(options[3], ViewOption::new("Yes", "Yes"));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_complete_with_yes() {
        let view = use_case()
            .step(&state("en", QuestionSourceMode::Default, &["Yes"]))
            .unwrap();
        match view {
            AssessmentView::Complete { answers, chart, .. } => {
                assert_eq!(answers.get("1. Data"), Some(3));
                assert_eq!(chart.trace().r, vec![3]);
                assert_eq!(chart.trace().theta, vec!["1. Data".to_string()]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_complete_with_not_relevant_has_empty_trace() {
        let view = use_case()
            .step(&state("en", QuestionSourceMode::Default, &["Not relevant"]))
            .unwrap();
        match view {
            AssessmentView::Complete { chart, .. } => assert!(chart.trace().is_empty()),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_upload_message() {
        let mut s = state("en", QuestionSourceMode::Upload, &[]);
        s.upload = Some(StateUpload {
            name: "bad.csv".to_string(),
            csv: "question_id,shorthand|1,Data".to_string(),
        });
        let view = use_case().step(&s).unwrap();
        match view {
            AssessmentView::InvalidQuestionFile { message, .. } => {
                assert!(message.ends_with("Instead got question_id, shorthand."))
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_too_many_answers() {
        let err = use_case()
            .step(&state("en", QuestionSourceMode::Default, &["Yes", "No"]))
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentStepError::TooManyAnswers { given: 2, total: 1 }
        ));
    }

    #[test]
    fn test_foreign_answer_label_rejected() {
        let err = use_case()
            .step(&state("en", QuestionSourceMode::Default, &["Ja"]))
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentStepError::Domain(DomainError::UnknownAnswer(_))
        ));
    }

    #[test]
    fn test_state_and_view_json() {
        let state: AssessmentState =
            serde_json::from_str(r#"{"language":"en","source":"default"}"#).unwrap();
        assert!(state.answers.is_empty());
        let view = use_case().step(&state).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "ask_question");
        assert_eq!(json["label"], "1. Data");
    }

    #[test]
    fn test_step_is_repeatable() {
        let s = state("sv", QuestionSourceMode::Default, &["Ja"]);
        let uc = use_case();
        assert_eq!(uc.step(&s).unwrap(), uc.step(&s).unwrap());
    }
}
