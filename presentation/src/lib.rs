//! Presentation layer for tiger-mate
//!
//! This crate contains CLI definitions, console rendering of assistant
//! replies, and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::repl::ChatRepl;
pub use chat::suggestions::SUGGESTED_PROMPTS;
pub use chat::{SnapshotForwarder, ask_once};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleRenderer;
