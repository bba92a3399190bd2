//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording conversation
//! events (user messages, assistant replies) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! conversation transcript in a machine-readable format (JSONL).

use mate_domain::{Message, Topic};
use serde_json::Value;

/// A structured transcript event for logging.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. Timestamps are the logger implementation's concern.
pub struct TranscriptEvent {
    /// Event type identifier (`"user_message"` or `"assistant_message"`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// Event for a recorded user message.
    pub fn user_message(message: &Message) -> Self {
        Self::new(
            "user_message",
            serde_json::json!({
                "id": message.id,
                "content": message.content,
            }),
        )
    }

    /// Event for a composed assistant reply, tagged with its topic.
    pub fn assistant_message(message: &Message, topic: Topic) -> Self {
        Self::new(
            "assistant_message",
            serde_json::json!({
                "id": message.id,
                "topic": topic,
                "bytes": message.content.len(),
                "content": message.content,
            }),
        )
    }
}

/// Port for logging transcript events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible —
/// logging failures must never disrupt a turn.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
