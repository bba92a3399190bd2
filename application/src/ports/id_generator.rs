//! Message id generation port
//!
//! Id generation is injected at session construction rather than reaching
//! for ambient randomness or the wall clock, so tests can assert id
//! uniqueness and ordering deterministically.

use mate_domain::MessageId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of opaque message ids
///
/// Implementations must produce ids that are pairwise distinct for the
/// lifetime of a session. They do not need to be globally unique or
/// sortable — history order is arrival order, not id order.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> MessageId;
}

/// Monotonic counter ids (`msg-1`, `msg-2`, …)
///
/// The deterministic default, and what tests use. Production wiring
/// usually prefers the UUID generator from the infrastructure layer.
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> MessageId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        MessageId::new(format!("msg-{}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_distinct_and_ordered() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "msg-1");
        assert_eq!(ids.next_id().as_str(), "msg-2");
        assert_eq!(ids.next_id().as_str(), "msg-3");
    }

    #[test]
    fn test_many_ids_pairwise_distinct() {
        let ids = SequentialIdGenerator::new();
        let generated: HashSet<_> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 10_000);
    }
}
