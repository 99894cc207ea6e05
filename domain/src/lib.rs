//! Domain layer for draviz
//!
//! This crate contains the core entities and value objects of the data
//! readiness assessment. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: one row of a question file (`question_id`, `shorthand`, `question_text`)
//! - **AnswerLegend**: the ordered, bidirectional code/label mapping of a language
//! - **AnswerSet**: answers keyed by `"<id>. <shorthand>"`, in question order
//! - **RadarChart**: a single closed polar trace of the relevant answers

pub mod assessment;
pub mod chart;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use assessment::{
    answers::{AnswerEntry, AnswerSet},
    language::Language,
    legend::{AnswerLegend, LegendEntry, NOT_RELEVANT},
    locale::LocaleStrings,
    source::{QuestionSource, QuestionSourceMode, UploadedFile},
    table::{QuestionTable, QuestionTableError, REQUIRED_COLUMNS, invalid_file_message},
};
pub use chart::radar::{PolarTrace, RADIAL_TICKS, RadarChart, RadialAxis};
pub use config::{ChartFormat, ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, question::Question};
