//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod chart_sink;
pub mod choice_prompt;
pub mod progress;
pub mod question_reader;
