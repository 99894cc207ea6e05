//! Console output formatter for assessment results

use colored::Colorize;
use draviz_application::{AssessmentOutcome, AssessmentView};
use draviz_domain::{
    AnswerLegend, AnswerSet, ConfigIssue, LocaleStrings, NOT_RELEVANT, RADIAL_TICKS,
};

/// Formats assessment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the end of an assessment run
    pub fn format(outcome: &AssessmentOutcome) -> String {
        match outcome {
            AssessmentOutcome::NoQuestions { language } => {
                let title = LocaleStrings::for_language(*language).title;
                format!("{}\n\n{}\n", Self::header(title), "No questions selected.".dimmed())
            }
            AssessmentOutcome::InvalidQuestionFile { language, message } => {
                let title = LocaleStrings::for_language(*language).title;
                format!("{}\n\n{}\n", Self::header(title), message.red().bold())
            }
            AssessmentOutcome::Completed {
                language,
                title,
                answers,
                rendered,
            } => {
                let legend = AnswerLegend::for_language(*language);
                let mut output = String::new();
                output.push_str(&Self::header(title));
                output.push('\n');
                output.push_str(&Self::format_answers(answers, &legend));
                output.push_str(&format!(
                    "\n{} {} of {} answers plotted\n",
                    "Chart:".cyan().bold(),
                    rendered.chart.trace().len(),
                    answers.len()
                ));
                output.push_str(&format!("{} {}\n", "Written to:".cyan().bold(), rendered.location));
                output.push_str(&Self::footer());
                output
            }
        }
    }

    /// One line per answer with a small bar for the plotted value
    pub fn format_answers(answers: &AnswerSet, legend: &AnswerLegend) -> String {
        let width = answers.labels().map(|l| l.chars().count()).max().unwrap_or(0);
        let full = RADIAL_TICKS.len() - 1;

        let mut output = Self::section_header("Answers");
        for entry in answers {
            let label = legend.label(entry.code).unwrap_or("?");
            let padded = format!("{:<width$}", entry.label, width = width);
            if entry.code == NOT_RELEVANT {
                output.push_str(&format!("  {}  {}\n", padded.dimmed(), label.dimmed()));
            } else {
                let filled = (entry.code as usize).min(full);
                let bar = format!("{}{}", "■".repeat(filled), "□".repeat(full - filled));
                output.push_str(&format!("  {}  {} {}\n", padded, bar.green(), label));
            }
        }
        output
    }

    /// Configuration warnings and errors, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                if issue.is_error() {
                    format!("{} {}", "error:".red().bold(), issue.message)
                } else {
                    format!("{} {}", "warning:".yellow().bold(), issue.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a step view as JSON
    pub fn format_view(view: &AssessmentView, pretty: bool) -> String {
        let json = if pretty {
            serde_json::to_string_pretty(view)
        } else {
            serde_json::to_string(view)
        };
        json.unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_application::{ChartLocation, RenderChartOutput};
    use draviz_domain::{ConfigIssueCode, Language, RadarChart, Severity};
    use std::path::PathBuf;

    fn answers(pairs: &[(&str, u8)]) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (label, code) in pairs {
            answers.record(*label, *code);
        }
        answers
    }

    #[test]
    fn test_format_answers_lists_every_answer() {
        let legend = AnswerLegend::for_language(Language::English);
        let text = ConsoleFormatter::format_answers(
            &answers(&[("1. Data", 3), ("2. Owner", 4), ("3. Docs", 0)]),
            &legend,
        );
        assert!(text.contains("1. Data"));
        assert!(text.contains("Yes"));
        assert!(text.contains("Not relevant"));
        assert!(text.contains("Don't know"));
    }

    #[test]
    fn test_format_completed_reports_plotted_count() {
        let legend = AnswerLegend::for_language(Language::English);
        let set = answers(&[("1. Data", 3), ("2. Owner", 4)]);
        let outcome = AssessmentOutcome::Completed {
            language: Language::English,
            title: "Data Readiness Assessment".to_string(),
            rendered: RenderChartOutput {
                chart: RadarChart::from_answers(&set, &legend),
                location: ChartLocation::File(PathBuf::from("radar.svg")),
            },
            answers: set,
        };
        let text = ConsoleFormatter::format(&outcome);
        assert!(text.contains("Data Readiness Assessment"));
        assert!(text.contains("1 of 2 answers plotted"));
        assert!(text.contains("radar.svg"));
    }

    #[test]
    fn test_format_invalid_file_shows_message() {
        let outcome = AssessmentOutcome::InvalidQuestionFile {
            language: Language::Swedish,
            message: "Not a valid question file.".to_string(),
        };
        let text = ConsoleFormatter::format(&outcome);
        assert!(text.contains("Bedömning av databeredskap"));
        assert!(text.contains("Not a valid question file."));
    }

    #[test]
    fn test_format_issues() {
        let issues = vec![
            ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingDataDir {
                    path: "data".to_string(),
                },
                message: "data directory 'data' does not exist".to_string(),
            },
            ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidDimension {
                    field: "chart.width".to_string(),
                    value: 0,
                },
                message: "chart.width must be at least 200".to_string(),
            },
        ];
        let text = ConsoleFormatter::format_issues(&issues);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("warning:"));
        assert!(lines[1].contains("error:"));
    }

    #[test]
    fn test_format_view_json() {
        let view = AssessmentView::NoQuestions {
            title: "Data Readiness Assessment".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_view(&view, false)).unwrap();
        assert_eq!(json["view"], "no_questions");
        assert_eq!(json["title"], "Data Readiness Assessment");
    }
}
