//! The ordered rule table driving classification and reply composition

use crate::core::error::DomainError;
use crate::routing::topic::Topic;

/// One (trigger set, reply template) rule
///
/// Triggers are case-insensitive substrings with OR semantics: the rule
/// matches when the input contains *any* of them. Reply templates may use
/// the `**…**` inline-emphasis convention; the table never interprets it —
/// that is [`split_emphasis`](crate::render::emphasis::split_emphasis)'s job
/// at render time.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    topic: Topic,
    triggers: Vec<String>,
    reply: String,
}

impl RuleEntry {
    pub fn new(
        topic: Topic,
        triggers: impl IntoIterator<Item = impl Into<String>>,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            topic,
            // Triggers are matched against lower-cased input, so they are
            // stored lower-cased regardless of how they were written.
            triggers: triggers
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
            reply: reply.into(),
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Whether any trigger is contained in the given lower-cased text
    fn matches(&self, lowercase_text: &str) -> bool {
        self.triggers.iter().any(|t| lowercase_text.contains(t))
    }
}

/// Ordered, immutable rule table with a mandatory fallback reply
///
/// Priority is positional: [`classify`](RuleTable::classify) scans entries
/// in list order and the first match wins, never the most specific or most
/// recent. An input matching nothing resolves to [`Topic::Fallback`], which
/// makes classification a total function.
///
/// The table is a plain value, constructed once and read-only afterwards.
/// Tests build their own small tables; production wiring injects
/// [`campus_default`](RuleTable::campus_default).
///
/// # Example
///
/// ```
/// use mate_domain::{RuleEntry, RuleTable, Topic};
///
/// let table = RuleTable::new(
///     vec![
///         RuleEntry::new(Topic::Housing, ["dorm"], "Housing office info"),
///         RuleEntry::new(Topic::Safety, ["police"], "Safety info"),
///     ],
///     "I didn't catch that.",
/// )
/// .unwrap();
///
/// assert_eq!(table.classify("where is my dorm"), Topic::Housing);
/// assert_eq!(table.classify("anything else"), Topic::Fallback);
/// assert_eq!(table.reply(Topic::Fallback), "I didn't catch that.");
/// ```
#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
    fallback_reply: String,
}

impl RuleTable {
    /// Build a table, validating the rule set
    ///
    /// Rejects entries with an empty trigger set (they could never match
    /// and would silently shadow nothing), duplicate topics, and an
    /// explicit `Fallback` entry — the fallback is the unconditional last
    /// rule by construction and carries no triggers.
    pub fn new(
        entries: Vec<RuleEntry>,
        fallback_reply: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let mut seen = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.topic == Topic::Fallback {
                return Err(DomainError::FallbackWithTriggers);
            }
            if entry.triggers.is_empty() {
                return Err(DomainError::EmptyTriggerSet(entry.topic));
            }
            if seen.contains(&entry.topic) {
                return Err(DomainError::DuplicateTopic(entry.topic));
            }
            seen.push(entry.topic);
        }

        Ok(Self {
            entries,
            fallback_reply: fallback_reply.into(),
        })
    }

    /// Classify a lower-cased prompt into a topic
    ///
    /// Pure, deterministic, total. Callers pass the prompt's
    /// [`matching_text`](crate::core::prompt::Prompt::matching_text);
    /// the stored original-case content never reaches the matcher.
    pub fn classify(&self, lowercase_text: &str) -> Topic {
        self.entries
            .iter()
            .find(|entry| entry.matches(lowercase_text))
            .map(|entry| entry.topic())
            .unwrap_or(Topic::Fallback)
    }

    /// Look up the reply template for a topic
    ///
    /// Pure and total: topics without a rule (including `Fallback`)
    /// resolve to the fallback reply, so composing after [`classify`]
    /// can never miss.
    pub fn reply(&self, topic: Topic) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.topic() == topic)
            .map(|entry| entry.reply())
            .unwrap_or(&self.fallback_reply)
    }

    /// Entries in priority order, fallback excluded
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn fallback_reply(&self) -> &str {
        &self.fallback_reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new(
            vec![
                RuleEntry::new(
                    Topic::FinancialAid,
                    ["financial aid", "fafsa"],
                    "aid reply",
                ),
                RuleEntry::new(Topic::TutoringSupport, ["tutor", "study"], "tutor reply"),
                RuleEntry::new(Topic::Safety, ["police"], "safety reply"),
            ],
            "fallback reply",
        )
        .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let t = table();
        assert_eq!(t.classify("i need a tutor"), Topic::TutoringSupport);
        assert_eq!(t.classify("where do i file my fafsa"), Topic::FinancialAid);
    }

    #[test]
    fn test_priority_is_positional_not_specificity() {
        let t = table();
        // Triggers from two entries: the earlier-listed entry wins,
        // regardless of keyword order inside the string.
        assert_eq!(
            t.classify("i need help with financial aid and tutoring study tips"),
            Topic::FinancialAid
        );
        assert_eq!(
            t.classify("study tips and financial aid please"),
            Topic::FinancialAid
        );
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let t = table();
        assert_eq!(t.classify("purple elephants dance slowly"), Topic::Fallback);
        assert_eq!(t.reply(Topic::Fallback), "fallback reply");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let t = table();
        let a = t.classify("campus police hours");
        let b = t.classify("campus police hours");
        assert_eq!(a, b);
        assert_eq!(a, Topic::Safety);
    }

    #[test]
    fn test_reply_lookup_is_total() {
        let t = table();
        assert_eq!(t.reply(Topic::Safety), "safety reply");
        // No rule for Housing in this table: resolves to the fallback
        assert_eq!(t.reply(Topic::Housing), "fallback reply");
    }

    #[test]
    fn test_triggers_are_case_insensitive() {
        let t = RuleTable::new(
            vec![RuleEntry::new(Topic::Housing, ["DORM"], "housing reply")],
            "fallback",
        )
        .unwrap();
        // Input is lower-cased by the caller; triggers are folded at build time
        assert_eq!(t.classify("my dorm room"), Topic::Housing);
    }

    #[test]
    fn test_empty_trigger_set_rejected() {
        let err = RuleTable::new(
            vec![RuleEntry::new(Topic::Housing, Vec::<String>::new(), "x")],
            "fallback",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::EmptyTriggerSet(Topic::Housing));
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let err = RuleTable::new(
            vec![
                RuleEntry::new(Topic::Housing, ["dorm"], "x"),
                RuleEntry::new(Topic::Housing, ["apartment"], "y"),
            ],
            "fallback",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::DuplicateTopic(Topic::Housing));
    }

    #[test]
    fn test_explicit_fallback_entry_rejected() {
        let err = RuleTable::new(
            vec![RuleEntry::new(Topic::Fallback, ["anything"], "x")],
            "fallback",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::FallbackWithTriggers);
    }
}
