//! UUID-backed message ids

use mate_application::IdGenerator;
use mate_domain::MessageId;
use uuid::Uuid;

/// Random v4 UUID ids for production sessions
///
/// Ids are opaque tokens; nothing orders or parses them. The sequential
/// generator in the application layer is the deterministic alternative
/// for tests.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> MessageId {
        MessageId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_pairwise_distinct() {
        let ids = UuidIdGenerator;
        let generated: HashSet<_> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 10_000);
    }

    #[test]
    fn test_uuid_id_shape() {
        let id = UuidIdGenerator.next_id();
        // Hyphenated v4 form, e.g. 67e55044-10b1-426f-9247-bb680e5fe0c8
        assert_eq!(id.as_str().len(), 36);
    }
}
