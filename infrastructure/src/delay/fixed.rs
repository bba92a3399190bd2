//! Fixed tokio-timer response delay

use async_trait::async_trait;
use mate_application::{ResponseDelay, SessionParams};
use std::time::Duration;

/// Sleeps for a fixed duration per turn via `tokio::time::sleep`
///
/// The production stand-in for a backend round trip. Runs entirely on the
/// event loop: the session stays responsive to reads and observer
/// subscriptions while a turn is waiting.
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_params(params: &SessionParams) -> Self {
        Self::new(params.response_delay)
    }
}

#[async_trait]
impl ResponseDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}
