//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use draviz_domain::{ChartFormat, QuestionSourceMode};
use std::path::PathBuf;

/// Chart file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// HTML page with an interactive plotly chart
    Html,
    /// Static SVG drawing
    Svg,
    /// Plotly figure JSON
    Json,
}

impl From<FormatArg> for ChartFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => ChartFormat::Html,
            FormatArg::Svg => ChartFormat::Svg,
            FormatArg::Json => ChartFormat::Json,
        }
    }
}

/// Where the questions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// No questions
    None,
    /// Bundled questions for the selected language
    Default,
    /// A CSV file given with --file (or asked for)
    Upload,
}

impl From<SourceArg> for QuestionSourceMode {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::None => QuestionSourceMode::None,
            SourceArg::Default => QuestionSourceMode::Default,
            SourceArg::Upload => QuestionSourceMode::Upload,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the next screen from a JSON state (request/response mode)
    Step {
        /// State file; reads stdin when omitted
        #[arg(long, value_name = "PATH")]
        state: Option<PathBuf>,

        /// Pretty-print the JSON view
        #[arg(long)]
        pretty: bool,
    },
}

/// CLI arguments for draviz
#[derive(Parser, Debug)]
#[command(name = "draviz")]
#[command(author, version, about = "Data readiness assessment rendered as a radar chart")]
#[command(long_about = r#"
draviz asks a set of data readiness questions and draws the answers as a radar chart.

The session has three steps:
1. Language and question source: English or Svenska; none, default or your own CSV
2. Questions: one answer per question (Don't know / No / Partially / Yes / Not relevant)
3. Chart: answers other than "Not relevant" are plotted, clockwise from the top

Question files are CSV with the columns question_id, shorthand, question_text.

Configuration files are loaded from (in priority order):
1. DRAVIZ_* environment variables (e.g. DRAVIZ_ASSESSMENT__LANGUAGE=sv)
2. --config <path>     Explicit config file
3. ./draviz.toml       Project-level config
4. ~/.config/draviz/config.toml   Global config

Example:
  draviz
  draviz --lang sv --source default -f svg -o radar.svg
  draviz --lang en --source upload --file my_questions.csv
  echo '{"language":"en","source":"default"}' | draviz step
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Language code (en or sv); asked when omitted
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Question source; asked when omitted
    #[arg(short, long, value_enum)]
    pub source: Option<SourceArg>,

    /// Question file for --source upload
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding defaultq_<lang>.csv
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Chart output path ("-" for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart format (defaults to the output extension, then html)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preselected_run() {
        let cli = Cli::parse_from([
            "draviz", "--lang", "sv", "--source", "default", "-f", "svg", "-o", "out.svg", "-vv",
        ]);
        assert_eq!(cli.lang.as_deref(), Some("sv"));
        assert_eq!(cli.source, Some(SourceArg::Default));
        assert_eq!(cli.format.map(ChartFormat::from), Some(ChartFormat::Svg));
        assert_eq!(cli.output, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_step_subcommand() {
        let cli = Cli::parse_from(["draviz", "step", "--state", "s.json", "--pretty"]);
        match cli.command {
            Some(Command::Step { state, pretty }) => {
                assert_eq!(state, Some(PathBuf::from("s.json")));
                assert!(pretty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_source_rejected_by_parser() {
        assert!(Cli::try_parse_from(["draviz", "--source", "web"]).is_err());
    }

    #[test]
    fn test_source_arg_maps_to_mode() {
        assert_eq!(QuestionSourceMode::from(SourceArg::Upload), QuestionSourceMode::Upload);
        assert_eq!(QuestionSourceMode::from(SourceArg::None), QuestionSourceMode::None);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
