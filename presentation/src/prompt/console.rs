//! Terminal implementation of the choice prompt.
//!
//! Options are listed with their number; the user may answer either with
//! the number or with the label itself:
//!
//! ```text
//! 3. Is the data documented?
//!   1) Don't know
//!   2) No
//!   3) Partially
//!   4) Yes
//!   5) Not relevant
//! > 4
//! ```

use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use draviz_application::{ChoicePrompt, PromptError};
use draviz_domain::UploadedFile;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Match user input against the listed options.
///
/// Accepts a 1-based option number or a label (case-insensitive).
pub fn parse_choice(input: &str, options: &[String]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }

    let wanted = input.to_lowercase();
    options
        .iter()
        .position(|option| option.to_lowercase() == wanted)
}

/// Interactive prompt reading stdin
///
/// While a question is on screen the progress bar (if any) is hidden, so
/// bar redraws never interleave with prompt lines.
pub struct ConsolePrompt {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
    progress: Option<Arc<ProgressReporter>>,
}

impl ConsolePrompt {
    /// Prompt on stdout
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }

    /// Prompt on stderr, leaving stdout to the chart document
    pub fn on_stderr() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stderr())
    }

    /// Prompt over arbitrary streams
    pub fn with_io(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
            progress: None,
        }
    }

    /// Hide this progress bar while prompting
    pub fn with_progress(mut self, progress: Arc<ProgressReporter>) -> Self {
        self.progress = Some(progress);
        self
    }

    fn suspended<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.progress {
            Some(progress) => progress.suspend(f),
            None => f(),
        }
    }

    fn write(&self, text: &str) -> Result<(), PromptError> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| PromptError::IoError("output lock poisoned".to_string()))?;
        output
            .write_all(text.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| PromptError::IoError(e.to_string()))
    }

    /// Read one line; end of input cancels the session
    fn read_line(&self) -> Result<String, PromptError> {
        let mut input = self
            .input
            .lock()
            .map_err(|_| PromptError::IoError("input lock poisoned".to_string()))?;
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| PromptError::IoError(e.to_string()))?;
        if read == 0 {
            return Err(PromptError::Cancelled);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn render_options(prompt: &str, options: &[String]) -> String {
        let mut text = format!("\n{}\n", prompt.bold());
        for (i, option) in options.iter().enumerate() {
            text.push_str(&format!("  {} {}\n", format!("{})", i + 1).dimmed(), option));
        }
        text
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoicePrompt for ConsolePrompt {
    fn choose(&self, prompt: &str, options: &[String]) -> Result<usize, PromptError> {
        self.suspended(|| self.ask_choice(prompt, options))
    }

    fn request_upload(&self, prompt: &str) -> Result<Option<UploadedFile>, PromptError> {
        self.suspended(|| self.ask_upload(prompt))
    }
}

impl ConsolePrompt {
    fn ask_choice(&self, prompt: &str, options: &[String]) -> Result<usize, PromptError> {
        if options.is_empty() {
            return Err(PromptError::InvalidInput(format!("no options for '{}'", prompt)));
        }

        self.write(&Self::render_options(prompt, options))?;
        loop {
            self.write(&format!("{} ", ">".green().bold()))?;
            let line = self.read_line()?;
            if let Some(index) = parse_choice(&line, options) {
                return Ok(index);
            }
            self.write(&format!(
                "{} Enter 1-{} or one of the labels above\n",
                "?".yellow().bold(),
                options.len()
            ))?;
        }
    }

    fn ask_upload(&self, prompt: &str) -> Result<Option<UploadedFile>, PromptError> {
        self.write(&format!(
            "\n{}\n{}\n",
            prompt.bold(),
            "(path to a .csv file, empty to skip)".dimmed()
        ))?;
        loop {
            self.write(&format!("{} ", ">".green().bold()))?;
            let line = self.read_line()?;
            let path = line.trim();
            if path.is_empty() {
                return Ok(None);
            }

            match std::fs::read(path) {
                Ok(content) => {
                    let name = Path::new(path)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.to_string());
                    return Ok(Some(UploadedFile::new(name, content)));
                }
                Err(e) => {
                    self.write(&format!("{} Cannot read {}: {}\n", "✗".red().bold(), path, e))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_application::AssessmentProgress;
    use std::io::Cursor;

    fn legend() -> Vec<String> {
        ["Don't know", "No", "Partially", "Yes", "Not relevant"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn prompt_with(input: &str) -> ConsolePrompt {
        ConsolePrompt::with_io(Cursor::new(input.to_string().into_bytes()), io::sink())
    }

    #[test]
    fn test_parse_choice_by_number() {
        assert_eq!(parse_choice("1", &legend()), Some(0));
        assert_eq!(parse_choice(" 5 ", &legend()), Some(4));
    }

    #[test]
    fn test_parse_choice_out_of_range() {
        assert_eq!(parse_choice("0", &legend()), None);
        assert_eq!(parse_choice("6", &legend()), None);
    }

    #[test]
    fn test_parse_choice_by_label() {
        assert_eq!(parse_choice("yes", &legend()), Some(3));
        assert_eq!(parse_choice("Not relevant", &legend()), Some(4));
        assert_eq!(parse_choice("maybe", &legend()), None);
        assert_eq!(parse_choice("", &legend()), None);
    }

    #[test]
    fn test_parse_choice_non_ascii_label() {
        let options = vec!["English".to_string(), "Svenska".to_string()];
        assert_eq!(parse_choice("svenska", &options), Some(1));
        let modes = vec!["Standardfrågor".to_string(), "Egna frågor".to_string()];
        assert_eq!(parse_choice("EGNA FRÅGOR", &modes), Some(1));
    }

    #[test]
    fn test_choose_reprompts_until_valid() {
        let prompt = prompt_with("banana\n9\nPartially\n");
        assert_eq!(prompt.choose("1. Data", &legend()), Ok(2));
    }

    #[test]
    fn test_choose_end_of_input_cancels() {
        let prompt = prompt_with("");
        assert_eq!(prompt.choose("1. Data", &legend()), Err(PromptError::Cancelled));
    }

    #[test]
    fn test_choose_without_options_is_invalid() {
        let prompt = prompt_with("1\n");
        assert!(matches!(
            prompt.choose("Language", &[]),
            Err(PromptError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_request_upload_empty_line_skips() {
        let prompt = prompt_with("\n");
        assert_eq!(prompt.request_upload("Upload csv file with questions"), Ok(None));
    }

    #[test]
    fn test_request_upload_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.csv");
        std::fs::write(&path, "question_id,shorthand,question_text\n").unwrap();

        let missing = dir.path().join("missing.csv");
        let prompt = prompt_with(&format!("{}\n{}\n", missing.display(), path.display()));
        let upload = prompt.request_upload("Upload").unwrap().unwrap();
        assert_eq!(upload.name, "mine.csv");
        assert_eq!(upload.content, b"question_id,shorthand,question_text\n");
    }

    #[test]
    fn test_prompting_with_progress_bar() {
        let reporter = Arc::new(ProgressReporter::new());
        reporter.on_questions_loaded(1);
        let prompt = prompt_with("4\n").with_progress(reporter.clone());

        assert_eq!(prompt.choose("1. Data", &legend()), Ok(3));
        assert_eq!(reporter.answered(), Some(0));
    }
}
