//! Presentation layer for draviz
//!
//! This crate contains CLI definitions, the interactive console prompt,
//! progress reporters and output formatters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg, SourceArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use prompt::console::{ConsolePrompt, parse_choice};
