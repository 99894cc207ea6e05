//! Interactive prompts

pub mod console;

pub use console::{ConsolePrompt, parse_choice};
