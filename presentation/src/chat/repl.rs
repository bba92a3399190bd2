//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleRenderer;
use crate::chat::ask_once;
use crate::chat::suggestions::{SUGGESTED_PROMPTS, suggestion};
use indicatif::{ProgressBar, ProgressStyle};
use mate_application::ChatSession;
use mate_domain::Role;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::time::Duration;

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    show_typing: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            show_typing: true,
            history_file: dirs::data_dir().map(|p| p.join("tiger-mate").join("history.txt")),
        }
    }

    /// Set whether to show the typing indicator
    pub fn with_typing_indicator(mut self, show: bool) -> Self {
        self.show_typing = show;
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        match self.handle_command(line).await {
                            CommandOutcome::Exit => break,
                            CommandOutcome::Handled => continue,
                        }
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye, Tiger!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Tiger M.A.T.E - Campus Assistant      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Hi, Tiger! Ask me anything about TSU campus life,");
        println!("classes, resources, or events.");
        println!();
        println!("Try one of these to get started:");
        for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
            println!("  /suggest {} - {}", i + 1, prompt);
        }
        println!();
        println!("Commands:");
        println!("  /help      - Show this help");
        println!("  /suggest   - List starter questions");
        println!("  /history   - Show this session's messages");
        println!("  /quit      - Exit chat");
        println!();
    }

    /// Handle slash commands.
    async fn handle_command(&self, cmd: &str) -> CommandOutcome {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye, Tiger!");
                CommandOutcome::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?     - Show this help");
                println!("  /suggest [n]      - List starter questions, or ask the n-th one");
                println!("  /history          - Show this session's messages");
                println!("  /quit, /exit, /q  - Exit chat");
                println!();
                CommandOutcome::Handled
            }
            "/suggest" | "/s" => {
                match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                    Some(n) => match suggestion(n) {
                        Some(prompt) => {
                            println!(">>> {}", prompt);
                            self.process_question(prompt).await;
                        }
                        None => {
                            println!(
                                "Pick a number between 1 and {}",
                                SUGGESTED_PROMPTS.len()
                            );
                        }
                    },
                    None => {
                        println!();
                        for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
                            println!("  {} - {}", i + 1, prompt);
                        }
                        println!();
                    }
                }
                CommandOutcome::Handled
            }
            "/history" => {
                println!();
                let history = self.session.history();
                if history.is_empty() {
                    println!("No messages yet.");
                }
                for message in &history {
                    match message.role {
                        Role::User => println!(">>> {}", message.content),
                        Role::Assistant => {
                            println!("{}", ConsoleRenderer::render_reply(&message.content))
                        }
                    }
                    println!();
                }
                CommandOutcome::Handled
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Handled
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let spinner = if self.show_typing {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.yellow} {msg}")
                    .unwrap(),
            );
            pb.set_message("M.A.T.E is typing...");
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let reply = ask_once(&self.session, question).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match reply {
            Some(message) => {
                println!("{}", ConsoleRenderer::render_message(&message));
                println!();
            }
            // Empty input is filtered before we get here, and the REPL
            // submits sequentially, so a dropped turn means the session
            // was already answering something else.
            None => {
                println!("(still thinking about the last question)");
                println!();
            }
        }
    }
}

enum CommandOutcome {
    Exit,
    Handled,
}
