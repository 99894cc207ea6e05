//! Collect Answers use case.
//!
//! Presents every question of a table in row order, offers the legend labels
//! as a single choice and records the code of the picked label.

use crate::ports::choice_prompt::{ChoicePrompt, PromptError};
use crate::ports::progress::AssessmentProgress;
use draviz_domain::{AnswerLegend, AnswerSet, QuestionTable, QuestionTableError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while collecting answers.
#[derive(Error, Debug)]
pub enum CollectAnswersError {
    /// The table does not describe questions (missing column, bad id).
    #[error("Invalid question table: {0}")]
    InvalidTable(#[from] QuestionTableError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

impl CollectAnswersError {
    /// Returns the table error when a required column is absent
    pub fn missing_field(&self) -> Option<&QuestionTableError> {
        match self {
            CollectAnswersError::InvalidTable(err) if err.is_missing_field() => Some(err),
            _ => None,
        }
    }
}

/// Use case for answering the questions of one table.
pub struct CollectAnswersUseCase {
    prompt: Arc<dyn ChoicePrompt>,
    progress: Arc<dyn AssessmentProgress>,
}

impl CollectAnswersUseCase {
    pub fn new(prompt: Arc<dyn ChoicePrompt>, progress: Arc<dyn AssessmentProgress>) -> Self {
        Self { prompt, progress }
    }

    /// Ask every question and return the answers in table order.
    pub fn execute(
        &self,
        table: &QuestionTable,
        legend: &AnswerLegend,
    ) -> Result<AnswerSet, CollectAnswersError> {
        let questions = table.questions()?;
        info!("Presenting {} questions", questions.len());
        self.progress.on_questions_loaded(questions.len());

        let options: Vec<String> = legend.labels().map(str::to_string).collect();
        let codes: Vec<u8> = legend.codes().collect();

        let mut answers = AnswerSet::new();
        for (index, question) in questions.iter().enumerate() {
            let picked = self.prompt.choose(&question.prompt(), &options)?;
            let code = *codes.get(picked).ok_or_else(|| {
                PromptError::InvalidInput(format!("option {} out of range", picked))
            })?;
            debug!("{} -> {}", question.label(), code);

            answers.record(question.label(), code);
            self.progress.on_answer_recorded(index, question, code);
        }

        self.progress.on_complete(&answers);
        Ok(answers)
    }
}
