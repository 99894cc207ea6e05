//! Question reader port
//!
//! Turns a resolved [`QuestionSource`] into a raw [`QuestionTable`]. Column
//! validation happens later, in the question presenter.

use draviz_domain::{QuestionSource, QuestionTable};
use thiserror::Error;

/// Errors while reading a question file
#[derive(Error, Debug)]
pub enum QuestionReadError {
    #[error("No question source selected")]
    NoSource,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {origin}: {message}")]
    Malformed { origin: String, message: String },
}

/// Reads tabular question files
pub trait QuestionReader: Send + Sync {
    /// Read the whole table behind `source`.
    ///
    /// [`QuestionSource::None`] yields [`QuestionReadError::NoSource`].
    fn read_table(&self, source: &QuestionSource) -> Result<QuestionTable, QuestionReadError>;
}
