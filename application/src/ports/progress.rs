//! Progress notification port
//!
//! Defines the interface for reporting progress while questions are answered.

use draviz_domain::{AnswerSet, Question};

/// Callback for progress updates during an assessment
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, log lines, nothing).
pub trait AssessmentProgress: Send + Sync {
    /// Called once the question table is validated
    fn on_questions_loaded(&self, total: usize);

    /// Called after each answer is recorded (`index` is zero-based)
    fn on_answer_recorded(&self, index: usize, question: &Question, code: u8);

    /// Called when every question has an answer
    fn on_complete(&self, answers: &AnswerSet);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AssessmentProgress for NoProgress {
    fn on_questions_loaded(&self, _total: usize) {}
    fn on_answer_recorded(&self, _index: usize, _question: &Question, _code: u8) {}
    fn on_complete(&self, _answers: &AnswerSet) {}
}
