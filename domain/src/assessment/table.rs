//! Raw question table as read from a CSV file

use crate::core::question::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Columns every question file must have, in the order they are reported
pub const REQUIRED_COLUMNS: [&str; 3] = ["question_id", "shorthand", "question_text"];

/// Errors raised while turning a table into questions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionTableError {
    #[error("missing field '{field}' (columns found: {})", .found.join(", "))]
    MissingField { field: String, found: Vec<String> },

    #[error("row {row}: question_id '{value}' is not an integer")]
    InvalidQuestionId { row: usize, value: String },
}

impl QuestionTableError {
    pub fn is_missing_field(&self) -> bool {
        matches!(self, QuestionTableError::MissingField { .. })
    }

    /// User-facing message for a file that lacks required columns
    pub fn user_message(&self) -> String {
        match self {
            QuestionTableError::MissingField { found, .. } => invalid_file_message(found),
            other => other.to_string(),
        }
    }
}

/// The on-screen message shown for a question file without the required columns
pub fn invalid_file_message<S: AsRef<str>>(found: &[S]) -> String {
    format!(
        "Not a valid question file. Expected columns {}. Instead got {}.",
        REQUIRED_COLUMNS.join(", "),
        found
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Header plus string cells, in file order
///
/// Unknown columns are carried along and ignored when building questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl QuestionTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Result<usize, QuestionTableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| QuestionTableError::MissingField {
                field: name.to_string(),
                found: self.columns.clone(),
            })
    }

    /// Read the questions in row order.
    ///
    /// Fails with [`QuestionTableError::MissingField`] on the first required
    /// column that is absent, even when the table has no rows. Short rows
    /// read missing cells as empty strings.
    pub fn questions(&self) -> Result<Vec<Question>, QuestionTableError> {
        let id_idx = self.column_index("question_id")?;
        let short_idx = self.column_index("shorthand")?;
        let text_idx = self.column_index("question_text")?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
                let raw_id = cell(id_idx);
                let question_id = raw_id.trim().parse::<i64>().map_err(|_| {
                    QuestionTableError::InvalidQuestionId {
                        row: row + 1,
                        value: raw_id.to_string(),
                    }
                })?;
                Ok(Question::new(question_id, cell(short_idx), cell(text_idx)))
            })
            .collect()
    }
}
