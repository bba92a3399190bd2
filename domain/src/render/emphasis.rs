//! Inline-emphasis segmentation of reply text
//!
//! Reply templates mark strong-emphasis spans with a `**…**` delimiter
//! pair. Splitting happens fresh at render time; nothing in the stored
//! message content is rewritten.

use serde::{Deserialize, Serialize};

const MARKER: &str = "**";

/// One run of reply text, either plain or emphasized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub emphasized: bool,
    pub text: String,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            emphasized: false,
            text: text.into(),
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            emphasized: true,
            text: text.into(),
        }
    }
}

/// Split text on `**…**` pairs into ordered plain/emphasized segments
///
/// Pure and idempotent-by-construction: substring content and order are
/// preserved exactly, with no trimming or case changes. Only complete
/// delimiter pairs toggle emphasis — an unpaired trailing `**` stays in
/// the output as literal text. Empty spans (`****`) produce no segment.
pub fn split_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(MARKER) {
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            // Unpaired marker: everything left is plain text
            break;
        };

        if open > 0 {
            segments.push(Segment::plain(&rest[..open]));
        }
        if close > 0 {
            segments.push(Segment::emphasized(&after_open[..close]));
        }
        rest = &after_open[close + MARKER.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_emphasis_span() {
        let segments = split_emphasis("Call **Career Services** today");
        assert_eq!(
            segments,
            vec![
                Segment::plain("Call "),
                Segment::emphasized("Career Services"),
                Segment::plain(" today"),
            ]
        );
    }

    #[test]
    fn test_no_markers_is_one_plain_segment() {
        let segments = split_emphasis("just plain text");
        assert_eq!(segments, vec![Segment::plain("just plain text")]);
    }

    #[test]
    fn test_empty_input_yields_no_segments() {
        assert!(split_emphasis("").is_empty());
    }

    #[test]
    fn test_multiple_spans_alternate() {
        let segments = split_emphasis("**A** and **B**");
        assert_eq!(
            segments,
            vec![
                Segment::emphasized("A"),
                Segment::plain(" and "),
                Segment::emphasized("B"),
            ]
        );
    }

    #[test]
    fn test_unpaired_marker_stays_literal() {
        let segments = split_emphasis("a ** b");
        assert_eq!(segments, vec![Segment::plain("a ** b")]);
    }

    #[test]
    fn test_empty_span_produces_no_segment() {
        let segments = split_emphasis("a****b");
        assert_eq!(segments, vec![Segment::plain("a"), Segment::plain("b")]);
    }

    #[test]
    fn test_content_preserved_exactly() {
        // No trimming, no case folding
        let segments = split_emphasis("  **  Mixed Case  **  ");
        assert_eq!(
            segments,
            vec![
                Segment::plain("  "),
                Segment::emphasized("  Mixed Case  "),
                Segment::plain("  "),
            ]
        );
    }

    #[test]
    fn test_multiline_reply_text() {
        let segments = split_emphasis("line one\n\n**Header** line two");
        assert_eq!(
            segments,
            vec![
                Segment::plain("line one\n\n"),
                Segment::emphasized("Header"),
                Segment::plain(" line two"),
            ]
        );
    }
}
