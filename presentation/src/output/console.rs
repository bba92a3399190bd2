//! Console renderer for chat messages
//!
//! Maps the domain's emphasis segments onto terminal styling. The stored
//! message content is never rewritten — segmentation happens fresh at
//! render time, per message.

use colored::Colorize;
use mate_domain::{Message, Role, split_emphasis};

/// Formats chat messages for terminal display
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Render reply text, turning `**…**` spans into bold terminal text
    ///
    /// `colored` handles tty detection and `NO_COLOR`, so piped output
    /// degrades to the plain characters automatically.
    pub fn render_reply(content: &str) -> String {
        split_emphasis(content)
            .into_iter()
            .map(|segment| {
                if segment.emphasized {
                    segment.text.bold().to_string()
                } else {
                    segment.text
                }
            })
            .collect()
    }

    /// Reply text with emphasis markers removed, no styling
    pub fn render_reply_plain(content: &str) -> String {
        split_emphasis(content)
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }

    /// Render a full message with its role label
    pub fn render_message(message: &Message) -> String {
        match message.role {
            Role::User => format!("{} {}", "You:".cyan().bold(), message.content),
            Role::Assistant => format!(
                "{}\n{}",
                "M.A.T.E".yellow().bold(),
                Self::render_reply(&message.content)
            ),
        }
    }

    /// The assistant message as a JSON object (for `--output json`)
    pub fn render_json(message: &Message) -> String {
        serde_json::to_string_pretty(message).unwrap_or_default()
    }
}
