//! Domain error types

use crate::routing::topic::Topic;
use thiserror::Error;

/// Domain-level errors
///
/// All variants are construction-time validation failures. Classification
/// itself is total and has no error path: the mandatory fallback rule
/// guarantees every input resolves to some topic.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Rule for topic '{0}' has an empty trigger set")]
    EmptyTriggerSet(Topic),

    #[error("Duplicate rule for topic '{0}'")]
    DuplicateTopic(Topic),

    #[error("The fallback topic cannot carry a trigger rule")]
    FallbackWithTriggers,

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::EmptyTriggerSet(Topic::Housing);
        assert_eq!(
            error.to_string(),
            "Rule for topic 'housing' has an empty trigger set"
        );
    }

    #[test]
    fn test_unknown_topic_display() {
        let error = DomainError::UnknownTopic("astrology".to_string());
        assert_eq!(error.to_string(), "Unknown topic: astrology");
    }
}
