//! CLI entrypoint for draviz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use draviz_application::{
    AssessmentConfig, AssessmentProgress, AssessmentState, AssessmentStepUseCase, ChartLocation,
    NoProgress, PromptError, RenderChartUseCase, RunAssessmentError, RunAssessmentUseCase,
    SelectSourceInput, SelectSourceUseCase,
};
use draviz_domain::{ChartFormat, QuestionSourceMode, UploadedFile};
use draviz_infrastructure::{ConfigLoader, CsvQuestionReader, FileConfig, chart_sink_for};
use draviz_presentation::{Cli, Command, ConsoleFormatter, ConsolePrompt, ProgressReporter};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so chart and step output on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting draviz");

    // === Configuration ===
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    // Flags replace file values before validation
    apply_cli_overrides(&cli, &mut file_config);
    let issues = file_config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_issues(&issues));
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    let config = effective_config(&cli, &file_config);
    debug!("Effective configuration: {:?}", config);

    // === Dependency Injection ===
    let reader = Arc::new(CsvQuestionReader::new());
    let selector = SelectSourceUseCase::new(config.data_dir.clone());

    if let Some(Command::Step { state, pretty }) = &cli.command {
        return run_step(selector, reader, &config, state.as_deref(), *pretty);
    }

    let mut input = SelectSourceInput::new();
    if let Some(language) = config.language {
        input = input.with_language(language);
    }
    if let Some(mode) = config.source {
        input = input.with_mode(mode);
    }
    if let Some(path) = &cli.file {
        let mode = upload_mode(cli.source.map(QuestionSourceMode::from))?;
        input = input.with_mode(mode).with_upload(read_upload(path)?);
    }

    let output_path = config.output_path();
    let sink = chart_sink_for(config.format, config.chart, &output_path);
    let renderer = RenderChartUseCase::new(sink).with_font_size(config.chart.font_size);

    // Prompts share stderr with the progress bar when stdout carries the chart
    let mut prompt = if chart_on_stdout(&output_path) {
        ConsolePrompt::on_stderr()
    } else {
        ConsolePrompt::new()
    };
    let progress: Arc<dyn AssessmentProgress> = if cli.quiet || !file_config.output.show_progress {
        Arc::new(NoProgress)
    } else {
        let reporter = Arc::new(ProgressReporter::new());
        prompt = prompt.with_progress(reporter.clone());
        reporter
    };

    let use_case =
        RunAssessmentUseCase::new(selector, reader, Arc::new(prompt), progress, renderer);

    let outcome = match use_case.execute(input) {
        Ok(outcome) => outcome,
        Err(RunAssessmentError::Prompt(PromptError::Cancelled)) => {
            eprintln!("Assessment cancelled");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // Output results; the summary moves to stderr when stdout carries the chart
    let output = ConsoleFormatter::format(&outcome);
    if outcome.chart_location() == Some(&ChartLocation::Stdout) {
        eprintln!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Handle one request of the step protocol: state JSON in, view JSON out
fn run_step(
    selector: SelectSourceUseCase,
    reader: Arc<CsvQuestionReader>,
    config: &AssessmentConfig,
    state_path: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let raw = match state_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read state from stdin")?;
            buf
        }
    };

    let state = parse_state(&raw)?;
    let step = AssessmentStepUseCase::new(selector, reader).with_font_size(config.chart.font_size);
    let view = step.step(&state)?;
    info!("Step view: {}", view.name());

    println!("{}", ConsoleFormatter::format_view(&view, pretty));
    Ok(())
}

/// An empty document is the initial state
fn parse_state(raw: &str) -> Result<AssessmentState> {
    if raw.trim().is_empty() {
        return Ok(AssessmentState::default());
    }
    serde_json::from_str(raw).context("Invalid assessment state")
}

/// Write command-line flags into the merged file configuration
fn apply_cli_overrides(cli: &Cli, file_config: &mut FileConfig) {
    if let Some(code) = &cli.lang {
        file_config.assessment.language = Some(code.clone());
    }
    if let Some(source) = cli.source {
        file_config.assessment.source = Some(QuestionSourceMode::from(source).as_str().to_string());
    }
    if let Some(dir) = &cli.data_dir {
        file_config.assessment.data_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(path) = &cli.output {
        file_config.output.path = Some(path.to_string_lossy().into_owned());
    }
}

/// Application configuration from the validated file config and the flags
fn effective_config(cli: &Cli, file_config: &FileConfig) -> AssessmentConfig {
    let mut config = file_config.to_assessment_config();

    // exact paths, including non UTF-8 ones
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(path) = &cli.output {
        config.output = Some(path.clone());
    }

    config.format = resolve_format(
        cli.format.map(ChartFormat::from),
        cli.output.as_deref(),
        file_config.output.format,
        config.output.as_deref(),
    );

    config
}

/// `--file` selects upload mode; any other explicit `--source` conflicts
fn upload_mode(flag: Option<QuestionSourceMode>) -> Result<QuestionSourceMode> {
    match flag {
        None | Some(QuestionSourceMode::Upload) => Ok(QuestionSourceMode::Upload),
        Some(other) => bail!(
            "--file is only used with --source upload, not --source {}",
            other.as_str()
        ),
    }
}

fn chart_on_stdout(output: &Path) -> bool {
    output == Path::new("-")
}

/// Explicit flag, then the `-o` extension, then the config file, then its path
fn resolve_format(
    flag: Option<ChartFormat>,
    cli_output: Option<&Path>,
    configured: Option<ChartFormat>,
    configured_output: Option<&Path>,
) -> ChartFormat {
    let from_path = |path: Option<&Path>| {
        path.and_then(|p| p.extension())
            .and_then(|ext| ChartFormat::from_extension(&ext.to_string_lossy()))
    };

    flag.or_else(|| from_path(cli_output))
        .or(configured)
        .or_else(|| from_path(configured_output))
        .unwrap_or_default()
}

fn read_upload(path: &Path) -> Result<UploadedFile> {
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read question file {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(UploadedFile::new(name, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use draviz_domain::{ConfigIssueCode, Language};
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_format_precedence() {
        assert_eq!(
            resolve_format(Some(ChartFormat::Json), Some(Path::new("a.svg")), None, None),
            ChartFormat::Json
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("a.svg")), Some(ChartFormat::Json), None),
            ChartFormat::Svg
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("-")), Some(ChartFormat::Json), None),
            ChartFormat::Json
        );
        assert_eq!(
            resolve_format(None, None, None, Some(Path::new("out/radar.svg"))),
            ChartFormat::Svg
        );
        assert_eq!(resolve_format(None, None, None, None), ChartFormat::Html);
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let cli = Cli::parse_from([
            "draviz", "--lang", "sv", "--source", "default", "--data-dir", "qs", "-o", "x.svg",
        ]);
        let mut file_config = FileConfig::default();
        apply_cli_overrides(&cli, &mut file_config);
        let config = effective_config(&cli, &file_config);
        assert_eq!(config.language, Some(Language::Swedish));
        assert_eq!(config.source, Some(QuestionSourceMode::Default));
        assert_eq!(config.data_dir, PathBuf::from("qs"));
        assert_eq!(config.format, ChartFormat::Svg);
        assert_eq!(config.output_path(), PathBuf::from("x.svg"));
    }

    #[test]
    fn test_unknown_language_fails_fast() {
        let cli = Cli::parse_from(["draviz", "--lang", "de"]);
        let mut file_config = FileConfig::default();
        apply_cli_overrides(&cli, &mut file_config);
        let issues = file_config.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.is_error() && i.message.contains("Unknown language: 'de'"))
        );
    }

    #[test]
    fn test_valid_flag_replaces_invalid_file_value() {
        let mut file_config = FileConfig::default();
        file_config.assessment.language = Some("de".to_string());
        file_config.assessment.source = Some("web".to_string());
        assert!(file_config.validate().iter().any(|i| i.is_error()));

        let cli = Cli::parse_from(["draviz", "--lang", "en", "--source", "none"]);
        apply_cli_overrides(&cli, &mut file_config);
        assert!(!file_config.validate().iter().any(|i| i.is_error()));

        let config = effective_config(&cli, &file_config);
        assert_eq!(config.language, Some(Language::English));
        assert_eq!(config.source, Some(QuestionSourceMode::None));
    }

    #[test]
    fn test_data_dir_flag_suppresses_missing_dir_warning() {
        let mut file_config = FileConfig::default();
        file_config.assessment.data_dir = "no/such/questions".to_string();
        assert!(file_config.validate().iter().any(|i| matches!(
            i.code,
            ConfigIssueCode::MissingDataDir { .. }
        )));

        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        let cli = Cli::parse_from([
            OsString::from("draviz"),
            OsString::from("--data-dir"),
            bundled.clone().into_os_string(),
        ]);
        apply_cli_overrides(&cli, &mut file_config);
        assert!(file_config.validate().is_empty());
        assert_eq!(effective_config(&cli, &file_config).data_dir, bundled);
    }

    #[test]
    fn test_file_flag_conflicts_with_other_sources() {
        assert_eq!(upload_mode(None).unwrap(), QuestionSourceMode::Upload);
        assert_eq!(
            upload_mode(Some(QuestionSourceMode::Upload)).unwrap(),
            QuestionSourceMode::Upload
        );
        for mode in [QuestionSourceMode::Default, QuestionSourceMode::None] {
            let err = upload_mode(Some(mode)).unwrap_err();
            assert!(err.to_string().contains(mode.as_str()));
        }
    }

    #[test]
    fn test_chart_on_stdout() {
        assert!(chart_on_stdout(Path::new("-")));
        assert!(!chart_on_stdout(Path::new("radar.html")));
    }

    #[test]
    fn test_parse_state() {
        assert_eq!(parse_state("  \n").unwrap(), AssessmentState::default());

        let state = parse_state(r#"{"language":"en","source":"default","answers":["Yes"]}"#).unwrap();
        assert_eq!(state.language.as_deref(), Some("en"));
        assert_eq!(state.source, Some(QuestionSourceMode::Default));
        assert_eq!(state.answers, vec!["Yes".to_string()]);

        assert!(parse_state("{not json").is_err());
    }
}
