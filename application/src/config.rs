//! Session parameters — turn pipeline control.
//!
//! [`SessionParams`] groups the static parameters that control a
//! [`ChatSession`](crate::use_cases::chat_session::ChatSession)'s turn
//! pipeline. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Turn pipeline parameters.
///
/// The response delay simulates a backend round trip between the user
/// message and the assistant message. It is the only suspension point in
/// a turn; swapping the simulated delay for a real network call changes
/// nothing else about the session's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// Simulated response latency per turn.
    pub response_delay: Duration,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(800),
        }
    }
}

impl SessionParams {
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }
}
