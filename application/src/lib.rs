//! Application layer for draviz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AssessmentConfig, ChartSettings};
pub use ports::{
    chart_sink::{ChartLocation, ChartSink, ChartSinkError},
    choice_prompt::{ChoicePrompt, PromptError},
    progress::{AssessmentProgress, NoProgress},
    question_reader::{QuestionReadError, QuestionReader},
};
pub use use_cases::assessment_step::{
    AssessmentState, AssessmentStepError, AssessmentStepUseCase, AssessmentView, StateUpload,
    ViewOption,
};
pub use use_cases::collect_answers::{CollectAnswersError, CollectAnswersUseCase};
pub use use_cases::render_chart::{RenderChartOutput, RenderChartUseCase};
pub use use_cases::run_assessment::{AssessmentOutcome, RunAssessmentError, RunAssessmentUseCase};
pub use use_cases::select_source::{
    SelectSourceError, SelectSourceInput, SelectSourceUseCase, SourceSelection,
};
