//! Collected answers, keyed by question label

use super::legend::AnswerLegend;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub label: String,
    pub code: u8,
}

/// Ordered mapping from question label (`"<id>. <shorthand>"`) to answer code
///
/// Iteration order is the order in which answers were recorded, which is the
/// row order of the question table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: Vec<AnswerEntry>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a label.
    ///
    /// A label that was already recorded keeps its position and gets the new
    /// code; the previous code is returned.
    pub fn record(&mut self, label: impl Into<String>, code: u8) -> Option<u8> {
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => Some(std::mem::replace(&mut existing.code, code)),
            None => {
                self.entries.push(AnswerEntry { label, code });
                None
            }
        }
    }

    /// Build an answer set from the labels picked for each question, in order.
    ///
    /// Extra selections beyond the question list are ignored; missing ones
    /// leave the set shorter than the question list.
    pub fn from_selections<S: AsRef<str>>(
        questions: &[Question],
        legend: &AnswerLegend,
        selections: &[S],
    ) -> Result<Self, DomainError> {
        let mut answers = Self::new();
        for (question, selected) in questions.iter().zip(selections) {
            let selected = selected.as_ref();
            let code = legend
                .code_of(selected)
                .ok_or_else(|| DomainError::UnknownAnswer(selected.to_string()))?;
            answers.record(question.label(), code);
        }
        Ok(answers)
    }

    pub fn get(&self, label: &str) -> Option<u8> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a AnswerEntry;
    type IntoIter = std::slice::Iter<'a, AnswerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
