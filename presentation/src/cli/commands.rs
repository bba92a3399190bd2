//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Rendered text with inline emphasis
    Text,
    /// The assistant message as JSON
    Json,
}

/// CLI arguments for tiger-mate
#[derive(Parser, Debug)]
#[command(name = "tiger-mate")]
#[command(author, version, about = "Tiger M.A.T.E - your TSU campus assistant")]
#[command(long_about = r#"
Tiger M.A.T.E answers campus-life questions from a built-in directory of
TSU resources: financial aid, advising, events, tutoring, health services,
housing, careers, dining, safety, and tech support.

Ask one question directly, or start an interactive chat session.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mate.toml         Project-level config
3. ~/.config/tiger-mate/config.toml   Global config

Example:
  tiger-mate "Where can I get financial aid help?"
  tiger-mate --chat
  tiger-mate --delay-ms 0 --output json "What events are happening this week?"
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format for one-shot answers
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Simulated response delay in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator and banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable transcript logging for this run
    #[arg(long)]
    pub no_transcript: bool,
}
