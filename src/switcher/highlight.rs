//! Match highlighting for option labels
//!
//! The highlight term is matched as literal text, ignoring case. Matched
//! substrings keep the label's original casing.

use regex::RegexBuilder;

/// A run of label text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightSegment {
    Plain(String),
    /// Text matching the highlight term, rendered with strong emphasis
    Strong(String),
}

impl HighlightSegment {
    pub fn text(&self) -> &str {
        match self {
            HighlightSegment::Plain(text) | HighlightSegment::Strong(text) => text,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, HighlightSegment::Strong(_))
    }
}

/// Split `label` into plain and emphasized segments for `term`.
///
/// A blank term, a term that matches nothing, or a term that cannot be
/// compiled yields the label as a single plain segment.
pub fn highlight_label(label: &str, term: &str) -> Vec<HighlightSegment> {
    let unmodified = || vec![HighlightSegment::Plain(label.to_string())];

    if term.trim().is_empty() {
        return unmodified();
    }

    let matcher = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => matcher,
        Err(e) => {
            tracing::debug!("Cannot highlight term {:?}: {}", term, e);
            return unmodified();
        }
    };

    let mut segments = Vec::new();
    let mut last_end = 0;
    for found in matcher.find_iter(label) {
        if found.start() > last_end {
            segments.push(HighlightSegment::Plain(
                label[last_end..found.start()].to_string(),
            ));
        }
        segments.push(HighlightSegment::Strong(found.as_str().to_string()));
        last_end = found.end();
    }

    if segments.is_empty() {
        return unmodified();
    }

    if last_end < label.len() {
        segments.push(HighlightSegment::Plain(label[last_end..].to_string()));
    }

    segments
}

/// Concatenated text of all segments, emphasis dropped
pub fn segments_text(segments: &[HighlightSegment]) -> String {
    segments.iter().map(HighlightSegment::text).collect()
}
