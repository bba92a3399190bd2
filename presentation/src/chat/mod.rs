//! Interactive chat: REPL, suggestions, and reply waiting

pub mod repl;
pub mod suggestions;

use mate_application::{ChatSession, SessionObserver, SessionSnapshot};
use mate_domain::Message;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Observer that forwards session snapshots into a channel
///
/// The terminal front-end consumes snapshots from the receiving side
/// instead of polling the session.
pub struct SnapshotForwarder {
    tx: mpsc::UnboundedSender<SessionSnapshot>,
}

impl SnapshotForwarder {
    pub fn channel() -> (Arc<Self>, mpsc::UnboundedReceiver<SessionSnapshot>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

impl SessionObserver for SnapshotForwarder {
    fn on_change(&self, snapshot: &SessionSnapshot) {
        // The receiver may already be gone (e.g. a reply arriving after
        // the front-end stopped waiting); dropping the snapshot is fine.
        let _ = self.tx.send(snapshot.clone());
    }
}

/// Submit one question and wait for its assistant reply.
///
/// Subscribes before submitting so no notification can be missed. Returns
/// `None` when the submission was a no-op (empty input or a turn already
/// in flight) — detected by the history not having grown.
pub async fn ask_once(session: &ChatSession, question: &str) -> Option<Message> {
    let before = session.history().len();
    let (forwarder, mut rx) = SnapshotForwarder::channel();
    let subscription = session.subscribe(forwarder);

    session.submit(question);
    if session.history().len() == before {
        session.unsubscribe(subscription);
        return None;
    }

    let mut reply = None;
    while let Some(snapshot) = rx.recv().await {
        if !snapshot.busy && snapshot.history.len() >= before + 2 {
            reply = snapshot.last_assistant().cloned();
            break;
        }
    }

    session.unsubscribe(subscription);
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use mate_application::{NoDelay, SequentialIdGenerator};
    use mate_domain::{Role, RuleTable};

    fn session() -> ChatSession {
        ChatSession::new(
            Arc::new(RuleTable::campus_default()),
            Arc::new(SequentialIdGenerator::new()),
            Arc::new(NoDelay),
        )
    }

    #[tokio::test]
    async fn test_ask_once_returns_the_reply() {
        let session = session();
        let reply = ask_once(&session, "What events are happening this week?")
            .await
            .unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.content.contains("Tiger Fest"));
    }

    #[tokio::test]
    async fn test_ask_once_rejects_empty_input() {
        let session = session();
        assert!(ask_once(&session, "   ").await.is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_ask_once_twice_keeps_history_ordered() {
        let session = session();
        ask_once(&session, "first question").await.unwrap();
        ask_once(&session, "second question").await.unwrap();

        let history = session.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].content, "first question");
        assert_eq!(history[2].content, "second question");
    }
}
