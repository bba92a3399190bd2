//! Application layer for tiger-mate
//!
//! This crate contains the chat session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    id_generator::{IdGenerator, SequentialIdGenerator},
    response_delay::{NoDelay, ResponseDelay},
    session_observer::{SessionObserver, SessionSnapshot, SubscriptionId},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::chat_session::ChatSession;
