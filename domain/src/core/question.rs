//! Question value object

use serde::{Deserialize, Serialize};

/// One row of a question file (Value Object)
///
/// Immutable once loaded from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question_id: i64,
    shorthand: String,
    question_text: String,
}

impl Question {
    /// Create a new question
    pub fn new(
        question_id: i64,
        shorthand: impl Into<String>,
        question_text: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            shorthand: shorthand.into(),
            question_text: question_text.into(),
        }
    }

    pub fn question_id(&self) -> i64 {
        self.question_id
    }

    pub fn shorthand(&self) -> &str {
        &self.shorthand
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Composite key used in answer sets and on the chart: `"<id>. <shorthand>"`
    pub fn label(&self) -> String {
        format!("{}. {}", self.question_id, self.shorthand)
    }

    /// Full prompt shown to the user: `"<id>. <question_text>"`
    pub fn prompt(&self) -> String {
        format!("{}. {}", self.question_id, self.question_text)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt())
    }
}
