//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assessment_step;
pub mod collect_answers;
pub mod render_chart;
pub mod run_assessment;
pub mod select_source;
