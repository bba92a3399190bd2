//! Prompt value object

use serde::{Deserialize, Serialize};

/// A normalized user prompt (Value Object)
///
/// Wraps the raw text a user typed after trimming surrounding whitespace.
/// The stored content keeps its original case and interior whitespace —
/// case-folding happens only in [`matching_text`](Prompt::matching_text),
/// which produces the lower-cased copy used for trigger matching and is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Try to create a prompt, returning `None` when the trimmed text is empty
    ///
    /// An empty submission is not an error: callers treat it as a no-op.
    pub fn try_new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// The trimmed, original-case text. This is what gets recorded in history.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lower-cased copy used only for trigger matching.
    pub fn matching_text(&self) -> String {
        self.content.to_lowercase()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
