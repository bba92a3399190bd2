//! CLI entrypoint for Tiger M.A.T.E
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use mate_application::{ChatSession, NoTranscriptLogger, TranscriptLogger};
use mate_domain::RuleTable;
use mate_infrastructure::{ConfigLoader, FileConfig, FixedDelay, JsonlTranscriptLogger, UuidIdGenerator};
use mate_presentation::{ChatRepl, Cli, ConsoleRenderer, OutputFormat, ask_once};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Tiger M.A.T.E");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))?
    };

    // CLI flags override file configuration
    let mut params = config.assistant.session_params();
    if let Some(ms) = cli.delay_ms {
        params = params.with_response_delay(Duration::from_millis(ms));
    }

    // === Dependency Injection ===
    let session = ChatSession::new(
        Arc::new(RuleTable::campus_default()),
        Arc::new(UuidIdGenerator),
        Arc::new(FixedDelay::from_params(&params)),
    )
    .with_transcript_logger(transcript_logger(&config, cli.no_transcript));

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(session)
            .with_typing_indicator(!cli.quiet)
            .with_history_file(
                config
                    .repl
                    .history_file
                    .as_ref()
                    .map(PathBuf::from)
                    .or_else(|| dirs::data_dir().map(|p| p.join("tiger-mate").join("history.txt"))),
            );

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let Some(reply) = ask_once(&session, &question).await else {
        bail!("Nothing to ask: the question was empty.");
    };

    match cli.output {
        OutputFormat::Text => {
            if cli.quiet {
                println!("{}", ConsoleRenderer::render_reply_plain(&reply.content));
            } else {
                println!("{}", ConsoleRenderer::render_message(&reply));
            }
        }
        OutputFormat::Json => println!("{}", ConsoleRenderer::render_json(&reply)),
    }

    Ok(())
}

/// Build the transcript logger from config, degrading to the no-op
/// implementation when disabled or when the file cannot be created.
fn transcript_logger(config: &FileConfig, disabled: bool) -> Arc<dyn TranscriptLogger> {
    if disabled || !config.transcript.enabled {
        return Arc::new(NoTranscriptLogger);
    }

    let path = config
        .transcript
        .path
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| {
            dirs::data_dir().map(|p| p.join("tiger-mate").join("transcript.jsonl"))
        });

    match path.and_then(|p| JsonlTranscriptLogger::new(p)) {
        Some(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoTranscriptLogger),
    }
}
