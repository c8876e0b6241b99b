use crate::matcher::{MatchSpan, find_matches};

/// A run of the original text, highlighted or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Split `source_text` into segments around `matches`.
///
/// Spans are character ranges, expected in ascending order without overlap.
/// Ranges past the end of the text are clamped and a span reaching back
/// before the previous one is trimmed, so the segments always concatenate
/// back to `source_text`.
pub fn build_segments(source_text: &str, matches: &[MatchSpan]) -> Vec<Segment> {
    if matches.is_empty() {
        return vec![Segment::plain(source_text)];
    }

    let byte_of_char = index_chars(source_text);
    let total_chars = byte_of_char.len() - 1;
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for span in matches {
        let start = span.start.clamp(cursor, total_chars);
        let end = span.end.clamp(start, total_chars);
        if start == end {
            continue;
        }

        if start > cursor {
            segments.push(Segment::plain(
                &source_text[byte_of_char[cursor]..byte_of_char[start]],
            ));
        }
        segments.push(Segment::highlighted(
            &source_text[byte_of_char[start]..byte_of_char[end]],
        ));
        cursor = end;
    }

    if cursor < total_chars || segments.is_empty() {
        segments.push(Segment::plain(&source_text[byte_of_char[cursor]..]));
    }

    segments
}

/// Find every occurrence of `search_term` and segment `source_text` around them
pub fn highlight(source_text: &str, search_term: &str) -> Vec<Segment> {
    build_segments(source_text, &find_matches(source_text, search_term))
}

/// Byte offset of each character, followed by `s.len()`
fn index_chars(s: &str) -> Vec<usize> {
    let mut byte_of_char: Vec<usize> = s.char_indices().map(|(b, _)| b).collect();
    byte_of_char.push(s.len());
    byte_of_char
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod segment_tests;
