//! Search match highlighting
//!
//! Splits text into matched and unmatched segments so a rendering layer
//! can emphasize every occurrence of the search text. The query is taken
//! literally and matched case-insensitively.

use labsite_domain::Publication;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

/// A run of text that either matches the query or doesn't
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// A compiled query, reusable across fields
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build a highlighter; a blank query highlights nothing
    pub fn new(query: &str) -> Self {
        if query.trim().is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                warn!(error = %e, "Search text could not be compiled for highlighting");
                Self { pattern: None }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Segment `text`. Concatenating the segments gives back `text`.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::new(text, false)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::new(&text[last..m.start()], false));
            }
            // The pattern is a non-empty literal, so matches are never empty
            segments.push(Segment::new(m.as_str(), true));
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment::new(&text[last..], false));
        }
        segments
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|pattern| pattern.is_match(text))
            .unwrap_or(false)
    }
}

/// Split `text` around case-insensitive occurrences of `query`
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    Highlighter::new(query).segments(text)
}

/// Highlighted segments for each displayed field of a publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationHighlights {
    pub title: Vec<Segment>,
    /// Authors joined with ", "
    pub authors: Vec<Segment>,
    pub venue: Vec<Segment>,
    #[serde(rename = "abstract")]
    pub abstract_text: Vec<Segment>,
    /// One segment list per keyword
    pub keywords: Vec<Vec<Segment>>,
}

impl PublicationHighlights {
    /// Names of the fields containing at least one match
    pub fn matched_fields(&self) -> Vec<&'static str> {
        let any = |segments: &[Segment]| segments.iter().any(|s| s.matched);

        let mut fields = Vec::new();
        if any(&self.title) {
            fields.push("title");
        }
        if any(&self.authors) {
            fields.push("authors");
        }
        if any(&self.venue) {
            fields.push("venue");
        }
        if any(&self.abstract_text) {
            fields.push("abstract");
        }
        if self.keywords.iter().any(|k| any(k)) {
            fields.push("keywords");
        }
        fields
    }
}

pub fn highlight_publication(publication: &Publication, query: &str) -> PublicationHighlights {
    let highlighter = Highlighter::new(query);

    PublicationHighlights {
        title: highlighter.segments(&publication.title),
        authors: highlighter.segments(&publication.authors_display()),
        venue: highlighter.segments(&publication.venue),
        abstract_text: highlighter.segments(&publication.abstract_text),
        keywords: publication
            .keywords
            .iter()
            .map(|keyword| highlighter.segments(keyword))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<(&str, bool)> {
        segments
            .iter()
            .map(|s| (s.text.as_str(), s.matched))
            .collect()
    }

    #[test]
    fn test_blank_query_is_one_unmatched_segment() {
        assert_eq!(texts(&highlight("Trust in IoT", "")), vec![("Trust in IoT", false)]);
        assert_eq!(texts(&highlight("Trust in IoT", "  ")), vec![("Trust in IoT", false)]);
    }

    #[test]
    fn test_case_insensitive_matches_keep_original_case() {
        assert_eq!(
            texts(&highlight("IoT trust for iot", "IOT")),
            vec![("IoT", true), (" trust for ", false), ("iot", true)]
        );
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(
            texts(&highlight("Is C++ (really) safe?", "(really)")),
            vec![("Is C++ ", false), ("(really)", true), (" safe?", false)]
        );
        assert_eq!(texts(&highlight("abc", ".")), vec![("abc", false)]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(texts(&highlight("SCADA", "xyz")), vec![("SCADA", false)]);
    }

    #[test]
    fn test_empty_text_with_query() {
        assert!(highlight("", "trust").is_empty());
    }

    #[test]
    fn test_whole_text_matches() {
        assert_eq!(texts(&highlight("Trust", "trust")), vec![("Trust", true)]);
    }
}
