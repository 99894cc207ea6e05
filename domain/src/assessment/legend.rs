//! Answer legend: the ordered code/label mapping behind every answer control

use super::language::Language;
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::HashMap;

/// Code of the "not relevant" answer, excluded from the chart
pub const NOT_RELEVANT: u8 = 4;

/// One option of the legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub code: u8,
    pub label: String,
}

/// Ordered, bidirectional mapping between answer codes and display labels
///
/// Both codes and labels are unique. Construction fails on duplicates so the
/// label → code lookup is never ambiguous.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AnswerLegend {
    entries: Vec<LegendEntry>,
    #[serde(skip)]
    by_label: HashMap<String, u8>,
}

impl AnswerLegend {
    /// Build a legend from `(code, label)` pairs, keeping their order
    pub fn new<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        let mut legend = Self {
            entries: Vec::new(),
            by_label: HashMap::new(),
        };

        for (code, label) in entries {
            let label = label.into();
            if legend.label(code).is_some() {
                return Err(DomainError::DuplicateLegendCode(code));
            }
            if legend.by_label.contains_key(&label) {
                return Err(DomainError::DuplicateLegendLabel(label));
            }
            legend.by_label.insert(label.clone(), code);
            legend.entries.push(LegendEntry { code, label });
        }

        Ok(legend)
    }

    /// The fixed legend for a language
    pub fn for_language(language: Language) -> Self {
        let labels: [&str; 5] = match language {
            Language::English => ["Don't know", "No", "Partially", "Yes", "Not relevant"],
            Language::Swedish => ["Vet inte", "Nej", "Delvis", "Ja", "Inte relevant"],
        };

        let entries: Vec<LegendEntry> = (0u8..)
            .zip(labels)
            .map(|(code, label)| LegendEntry {
                code,
                label: label.to_string(),
            })
            .collect();
        let by_label = entries.iter().map(|e| (e.label.clone(), e.code)).collect();

        Self { entries, by_label }
    }

    /// Label shown for a code
    pub fn label(&self, code: u8) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
    }

    /// Code behind a label (reverse lookup)
    pub fn code_of(&self, label: &str) -> Option<u8> {
        self.by_label.get(label).copied()
    }

    pub fn contains_code(&self, code: u8) -> bool {
        self.label(code).is_some()
    }

    /// Labels in legend order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Codes in legend order
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|e| e.code)
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for AnswerLegend {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AnswerLegend {}
