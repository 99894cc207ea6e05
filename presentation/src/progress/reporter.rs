//! Progress reporting while questions are answered

use colored::Colorize;
use draviz_application::AssessmentProgress;
use draviz_domain::{AnswerSet, Question};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports answered questions with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    /// Run `f` with the bar cleared from the terminal; it is redrawn afterwards
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        let bar = self.bar.lock().ok().and_then(|bar| bar.clone());
        match bar {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    #[cfg(test)]
    pub(crate) fn answered(&self) -> Option<u64> {
        self.bar.lock().ok()?.as_ref().map(|pb| pb.position())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentProgress for ProgressReporter {
    fn on_questions_loaded(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Answered");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_answer_recorded(&self, _index: usize, question: &Question, _code: u8) {
        let Ok(bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.as_ref() {
            pb.set_message(format!("{} {}", "v".green(), question.label()));
            pb.inc(1);
        }
    }

    fn on_complete(&self, answers: &AnswerSet) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = bar.take() {
            pb.finish_with_message(format!("{} answers recorded", answers.len()).green().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_answers() {
        let reporter = ProgressReporter::new();
        let question = Question::new(1, "Data", "Is data available?");

        reporter.on_questions_loaded(2);
        reporter.on_answer_recorded(0, &question, 3);
        {
            let bar = reporter.bar.lock().unwrap();
            let pb = bar.as_ref().unwrap();
            assert_eq!(pb.position(), 1);
            assert_eq!(pb.length(), Some(2));
        }

        let mut answers = AnswerSet::new();
        answers.record(question.label(), 3);
        reporter.on_complete(&answers);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_answer_before_load_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_answer_recorded(0, &Question::new(1, "Data", "?"), 0);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_suspend_runs_with_and_without_bar() {
        let reporter = ProgressReporter::new();
        assert_eq!(reporter.suspend(|| 7), 7);

        reporter.on_questions_loaded(3);
        assert_eq!(reporter.suspend(|| "shown"), "shown");
        assert_eq!(reporter.answered(), Some(0));
    }
}
