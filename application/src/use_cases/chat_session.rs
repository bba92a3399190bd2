//! Chat session use case.
//!
//! Owns one conversation: an append-only message history and a busy flag,
//! orchestrating normalize → classify → compose across the simulated
//! latency boundary.
//!
//! The session is a two-state machine (`Idle`/`Busy`) with a capacity of
//! one: at most one unanswered user turn exists at any time. A submission
//! while a turn is in flight is dropped entirely — it is not queued and
//! does not cancel anything. That drop is deliberate product behavior,
//! not an incidental limitation.

use crate::ports::id_generator::IdGenerator;
use crate::ports::response_delay::ResponseDelay;
use crate::ports::session_observer::{SessionObserver, SessionSnapshot, SubscriptionId};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use mate_domain::{Message, Prompt, RuleTable, truncate_str};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// One continuous chat interaction.
///
/// Created when a chat view opens and discarded when it closes; holds no
/// cross-session state. The rule table, id source, and response delay are
/// injected at construction, so parallel sessions (and parallel tests)
/// never share state.
///
/// `submit` is fire-and-forget: success or no-op is observable only
/// through subsequent state reads and observer notifications, never
/// through a return value.
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    rules: Arc<RuleTable>,
    ids: Arc<dyn IdGenerator>,
    delay: Arc<dyn ResponseDelay>,
    transcript: Arc<dyn TranscriptLogger>,
    history: Mutex<Vec<Message>>,
    // True iff a user message has been appended without its paired
    // assistant message. Claimed with compare-and-swap so two concurrent
    // submits can never both pass the gate.
    busy: AtomicBool,
    observers: Mutex<Vec<(SubscriptionId, Arc<dyn SessionObserver>)>>,
    next_subscription: AtomicU64,
}

impl ChatSession {
    pub fn new(
        rules: Arc<RuleTable>,
        ids: Arc<dyn IdGenerator>,
        delay: Arc<dyn ResponseDelay>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                rules,
                ids,
                delay,
                transcript: Arc::new(NoTranscriptLogger),
                history: Mutex::new(Vec::new()),
                busy: AtomicBool::new(false),
                observers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        let inner = Arc::get_mut(&mut self.inner)
            .expect("with_transcript_logger must be called before the session is shared");
        inner.transcript = logger;
        self
    }

    /// Submit free-text user input.
    ///
    /// No-ops silently when the trimmed text is empty or when a turn is
    /// already in flight. Otherwise records the user message, flips to
    /// busy, and schedules the response pipeline on the current tokio
    /// runtime. Once scheduled, the turn always resolves.
    pub fn submit(&self, raw: &str) {
        let Some(prompt) = Prompt::try_new(raw) else {
            debug!("empty submission ignored");
            return;
        };

        // Capacity-of-one gate. Claim the in-flight slot before touching
        // history; on failure the submission is dropped, not queued.
        if self
            .inner
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(
                "submission dropped, turn in flight: {}",
                truncate_str(prompt.content(), 60)
            );
            return;
        }

        let matching_text = prompt.matching_text();
        let user_message = Message::user(self.inner.ids.next_id(), prompt.into_content());

        self.inner
            .transcript
            .log(TranscriptEvent::user_message(&user_message));
        debug!(
            "turn started: {}",
            truncate_str(&user_message.content, 60)
        );

        self.inner.push_and_notify(user_message);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.delay.wait().await;

            let topic = inner.rules.classify(&matching_text);
            let reply = inner.rules.reply(topic).to_string();
            let assistant_message = Message::assistant(inner.ids.next_id(), reply);

            inner
                .transcript
                .log(TranscriptEvent::assistant_message(&assistant_message, topic));
            info!(
                topic = %topic,
                "turn resolved: {}",
                truncate_str(&assistant_message.content, 80)
            );

            inner.push_and_notify(assistant_message);
        });
    }

    /// Snapshot of the ordered message history.
    pub fn history(&self) -> Vec<Message> {
        self.inner.history.lock().unwrap().clone()
    }

    /// Whether a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.inner.busy.load(Ordering::Acquire)
    }

    /// Register an observer; it is notified on every history/busy change.
    pub fn subscribe(&self, observer: Arc<dyn SessionObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(
            self.inner.next_subscription.fetch_add(1, Ordering::Relaxed),
        );
        self.inner.observers.lock().unwrap().push((id, observer));
        id
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .observers
            .lock()
            .unwrap()
            .retain(|(existing, _)| *existing != id);
    }
}

impl SessionInner {
    /// Append a message, settle the busy flag, and notify observers with a
    /// consistent snapshot.
    ///
    /// The busy flag is released here, under the history lock, when the
    /// appended message is an assistant reply — so no observer or reader
    /// can ever see a completed pair still marked busy, and no new
    /// submission can slip in between the append and the release.
    fn push_and_notify(&self, message: Message) {
        let snapshot = {
            let mut history = self.history.lock().unwrap();
            let turn_complete = message.is_assistant();
            history.push(message);
            if turn_complete {
                self.busy.store(false, Ordering::Release);
            }
            SessionSnapshot {
                history: history.clone(),
                busy: self.busy.load(Ordering::Acquire),
            }
        };

        let observers: Vec<_> = self
            .observers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_change(&snapshot);
        }
    }
}
