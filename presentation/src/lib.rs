//! Presentation layer for regform
//!
//! This crate contains the CLI definition, the console form view,
//! interactive prompts and payload formatting.

pub mod cli;
pub mod output;
pub mod prompt;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::formatter::PayloadFormatter;
pub use prompt::interactive::{InteractivePrompt, PromptError};
pub use view::console::{ConsoleFormView, ViewState};
