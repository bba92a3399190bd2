//! Session observation port
//!
//! The UI collaborator subscribes to a session and re-renders whenever the
//! message list or busy flag changes. Observers receive a consistent
//! snapshot — history and busy captured together — so a renderer never
//! sees a half-updated turn.

use mate_domain::Message;

/// Immutable snapshot of a session's observable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Ordered message history, oldest first.
    pub history: Vec<Message>,
    /// Whether a turn is currently in flight.
    pub busy: bool,
}

impl SessionSnapshot {
    /// The most recent assistant message, if any
    pub fn last_assistant(&self) -> Option<&Message> {
        self.history.iter().rev().find(|m| m.is_assistant())
    }
}

/// Callback for session state changes
///
/// Implementations live in the presentation layer (message list renderer,
/// typing indicator) or in tests. `on_change` is called synchronously from
/// the session; implementations should hand work off rather than block.
pub trait SessionObserver: Send + Sync {
    fn on_change(&self, snapshot: &SessionSnapshot);
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_domain::MessageId;

    #[test]
    fn test_last_assistant() {
        let snapshot = SessionSnapshot {
            history: vec![
                Message::user(MessageId::new("1"), "q1"),
                Message::assistant(MessageId::new("2"), "a1"),
                Message::user(MessageId::new("3"), "q2"),
            ],
            busy: true,
        };
        assert_eq!(snapshot.last_assistant().unwrap().content, "a1");
    }

    #[test]
    fn test_last_assistant_empty_history() {
        let snapshot = SessionSnapshot {
            history: vec![],
            busy: false,
        };
        assert!(snapshot.last_assistant().is_none());
    }
}
