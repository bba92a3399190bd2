//! Simulated response latency port
//!
//! The pause between a user message and its assistant reply stands in for
//! a real backend round trip. It is modeled as a port so the session's
//! state machine never touches a timer directly, and so tests can run
//! with zero delay instead of depending on wall-clock time.

use async_trait::async_trait;

/// The single suspension point in a turn
///
/// `wait` is awaited exactly once per scheduled turn, between the user
/// message append and the classification/compose step. Implementations
/// must eventually return — there is no cancellation path, and a turn's
/// completion is guaranteed once it is scheduled.
#[async_trait]
pub trait ResponseDelay: Send + Sync {
    async fn wait(&self);
}

/// Zero-delay implementation for tests and non-interactive use
pub struct NoDelay;

#[async_trait]
impl ResponseDelay for NoDelay {
    async fn wait(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        NoDelay.wait().await;
    }
}
