//! Run Assessment use case.
//!
//! Executes the whole questionnaire in one pass:
//!
//! ```text
//! SelectSource ──> QuestionReader ──> CollectAnswers ──> RenderChart
//!      │                                    │
//!      └─ no source: stop                   └─ missing column: message, stop
//! ```

use super::collect_answers::{CollectAnswersError, CollectAnswersUseCase};
use super::render_chart::{RenderChartOutput, RenderChartUseCase};
use super::select_source::{SelectSourceError, SelectSourceInput, SelectSourceUseCase};
use crate::ports::chart_sink::{ChartLocation, ChartSinkError};
use crate::ports::choice_prompt::{ChoicePrompt, PromptError};
use crate::ports::progress::AssessmentProgress;
use crate::ports::question_reader::{QuestionReadError, QuestionReader};
use draviz_domain::{AnswerSet, Language, QuestionTableError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that end an assessment run.
///
/// A file without the required columns is not an error here; it becomes
/// [`AssessmentOutcome::InvalidQuestionFile`].
#[derive(Error, Debug)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Selection(#[from] SelectSourceError),

    #[error(transparent)]
    Read(#[from] QuestionReadError),

    #[error(transparent)]
    Table(QuestionTableError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Chart(#[from] ChartSinkError),
}

impl From<CollectAnswersError> for RunAssessmentError {
    fn from(err: CollectAnswersError) -> Self {
        match err {
            CollectAnswersError::InvalidTable(table) => RunAssessmentError::Table(table),
            CollectAnswersError::Prompt(prompt) => RunAssessmentError::Prompt(prompt),
        }
    }
}

/// How an assessment run ended
#[derive(Debug, Clone)]
pub enum AssessmentOutcome {
    /// No question source was chosen; nothing to present
    NoQuestions { language: Language },
    /// The question file lacks required columns
    InvalidQuestionFile { language: Language, message: String },
    /// All questions answered and the chart shown
    Completed {
        language: Language,
        title: String,
        answers: AnswerSet,
        rendered: RenderChartOutput,
    },
}

impl AssessmentOutcome {
    /// Where the chart went, if one was drawn
    pub fn chart_location(&self) -> Option<&ChartLocation> {
        match self {
            AssessmentOutcome::Completed { rendered, .. } => Some(&rendered.location),
            _ => None,
        }
    }
}

/// Use case wiring the three assessment steps together.
pub struct RunAssessmentUseCase {
    selector: SelectSourceUseCase,
    reader: Arc<dyn QuestionReader>,
    prompt: Arc<dyn ChoicePrompt>,
    progress: Arc<dyn AssessmentProgress>,
    renderer: RenderChartUseCase,
}

impl RunAssessmentUseCase {
    pub fn new(
        selector: SelectSourceUseCase,
        reader: Arc<dyn QuestionReader>,
        prompt: Arc<dyn ChoicePrompt>,
        progress: Arc<dyn AssessmentProgress>,
        renderer: RenderChartUseCase,
    ) -> Self {
        Self {
            selector,
            reader,
            prompt,
            progress,
            renderer,
        }
    }

    pub fn execute(&self, input: SelectSourceInput) -> Result<AssessmentOutcome, RunAssessmentError> {
        let selection = self.selector.execute(input, self.prompt.as_ref())?;
        let language = selection.language;

        if selection.source.is_none() {
            info!("No question source selected");
            return Ok(AssessmentOutcome::NoQuestions { language });
        }

        let table = self.reader.read_table(&selection.source)?;
        let presenter = CollectAnswersUseCase::new(self.prompt.clone(), self.progress.clone());

        let answers = match presenter.execute(&table, &selection.legend) {
            Ok(answers) => answers,
            Err(err) => {
                if let Some(missing) = err.missing_field() {
                    warn!("Rejected question file: {}", missing);
                    return Ok(AssessmentOutcome::InvalidQuestionFile {
                        language,
                        message: missing.user_message(),
                    });
                }
                return Err(err.into());
            }
        };

        let rendered = self
            .renderer
            .execute(&answers, &selection.legend, selection.title())?;

        Ok(AssessmentOutcome::Completed {
            language,
            title: selection.title().to_string(),
            answers,
            rendered,
        })
    }
}
