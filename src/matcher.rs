use memchr::memmem;

use crate::normalize::{Folded, fold, normalize};
use crate::segment::{Segment, build_segments};

/// A matched range of the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Start position (0-indexed, in characters not bytes)
    pub start: usize,
    /// End position, exclusive
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A search term prepared once and matched against many texts.
///
/// Matching ignores case and diacritics on both sides. Occurrences are found
/// left to right and never overlap: after a match the search resumes right
/// after it.
///
/// Spans are reported in characters of the original text. A match starts at
/// the source character its first folded character came from and is as long
/// as the normalized term. Decompositions that change the number of base
/// characters (Hangul syllables, for instance) are not re-mapped, so spans
/// are approximate there; they are clamped so they stay ordered and inside
/// the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    term: String,
    folded: Folded,
    span_len: usize,
}

impl Highlighter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            folded: fold(term),
            span_len: normalize(term, false).chars().count(),
        }
    }

    /// The search term as given
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the term folds to nothing and therefore matches nothing
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// All non-overlapping matches in `text`, in ascending order
    pub fn find(&self, text: &str) -> Vec<MatchSpan> {
        if self.is_empty() {
            return Vec::new();
        }

        let hay = fold(text);
        let source_len = text.chars().count();
        let mut spans = Vec::new();
        let mut floor = 0;

        for byte_pos in memmem::find_iter(hay.text.as_bytes(), self.folded.text.as_bytes()) {
            let start = hay
                .origin(hay.char_at_byte(byte_pos), source_len)
                .max(floor);
            let end = (start + self.span_len).min(source_len);
            if start >= end {
                continue;
            }

            spans.push(MatchSpan { start, end });
            floor = end;
        }

        spans
    }

    /// Whether `text` contains the term at least once
    pub fn is_match(&self, text: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        memmem::find(fold(text).text.as_bytes(), self.folded.text.as_bytes()).is_some()
    }

    /// `text` split into plain and highlighted segments
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        build_segments(text, &self.find(text))
    }
}

/// Find all non-overlapping occurrences of `search_term` in `source_text`,
/// ignoring case and diacritics.
///
/// An empty term, or one made only of diacritics, matches nothing.
pub fn find_matches(source_text: &str, search_term: &str) -> Vec<MatchSpan> {
    Highlighter::new(search_term).find(source_text)
}

/// Whether `source_text` contains `search_term`, ignoring case and diacritics
pub fn contains_normalized(source_text: &str, search_term: &str) -> bool {
    Highlighter::new(search_term).is_match(source_text)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
