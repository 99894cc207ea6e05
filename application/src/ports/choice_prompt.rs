//! Choice prompt port for collecting the user's selections.
//!
//! Every interactive step of an assessment is a single choice among a fixed
//! list of labels (language, question source, one answer per question), plus
//! the one-off file upload.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ChoicePrompt`] - defined here in application layer
//! - **Adapter**: `ConsolePrompt` - implemented in presentation layer
//!
//! Tests drive the use cases with `ScriptedPrompt`, which replays a fixed
//! list of answers.

use draviz_domain::UploadedFile;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;
use thiserror::Error;

/// Error type for prompt operations.
///
/// These errors represent failures while asking, not choices made by the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// User cancelled the session (e.g., end of input).
    #[error("Operation cancelled")]
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    #[error("I/O error: {0}")]
    IoError(String),
    /// Input that cannot be matched to any option.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Port for asking the user to pick one option.
///
/// Implementations are responsible for:
/// 1. Displaying the prompt and options
/// 2. Collecting user input until it names exactly one option
/// 3. Returning the index of that option
pub trait ChoicePrompt: Send + Sync {
    /// Ask for one of `options`; returns its index.
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize, PromptError>;

    /// Ask for a question file. `Ok(None)` means nothing was supplied.
    fn request_upload(&self, prompt: &str) -> Result<Option<UploadedFile>, PromptError>;
}

/// One scripted reply
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    /// Pick the option with this exact label
    Label(String),
    /// Pick the option at this index
    Index(usize),
    /// Supply (or decline) an upload
    Upload(Option<UploadedFile>),
}

/// Prompt that replays prepared replies in order.
///
/// Running out of replies yields [`PromptError::Cancelled`].
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: Mutex<VecDeque<ScriptedReply>>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
        }
    }

    /// Replies picking options by label
    pub fn from_labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::new(labels.into_iter().map(|l| ScriptedReply::Label(l.into())))
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn next_reply(&self) -> Result<ScriptedReply, PromptError> {
        self.replies
            .lock()
            .map_err(|_| PromptError::IoError("scripted prompt poisoned".to_string()))?
            .pop_front()
            .ok_or(PromptError::Cancelled)
    }
}

#[cfg(test)]
impl ChoicePrompt for ScriptedPrompt {
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize, PromptError> {
        match self.next_reply()? {
            ScriptedReply::Label(label) => options
                .iter()
                .position(|o| *o == label)
                .ok_or_else(|| PromptError::InvalidInput(format!("'{}' for '{}'", label, prompt))),
            ScriptedReply::Index(index) if index < options.len() => Ok(index),
            ScriptedReply::Index(index) => Err(PromptError::InvalidInput(format!(
                "option {} of {} for '{}'",
                index,
                options.len(),
                prompt
            ))),
            ScriptedReply::Upload(_) => Err(PromptError::InvalidInput(format!(
                "upload given where '{}' expects a choice",
                prompt
            ))),
        }
    }

    fn request_upload(&self, prompt: &str) -> Result<Option<UploadedFile>, PromptError> {
        match self.next_reply()? {
            ScriptedReply::Upload(file) => Ok(file),
            other => Err(PromptError::InvalidInput(format!(
                "{:?} given where '{}' expects an upload",
                other, prompt
            ))),
        }
    }
}
