//! The readiness assessment: languages, answer legends, question sources
//! and collected answers.

pub mod answers;
pub mod language;
pub mod legend;
pub mod locale;
pub mod source;
pub mod table;
