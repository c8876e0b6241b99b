//! Accent stripping and the case-folded comparison form.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::decompose_canonical;

/// Characters escaped by [`escape_regex`].
const REGEX_META: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

#[inline]
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Decompose `value` (NFD) and drop combining diacritical marks.
///
/// Case is preserved. With `escape_for_regex` set, regex metacharacters in
/// the result are prefixed with a backslash so it can be embedded in a
/// pattern as a literal.
pub fn normalize(value: &str, escape_for_regex: bool) -> String {
    // U+034F blocks canonical reordering; once dropped, the marks around it
    // must be reordered for the result to stay in NFD.
    let stripped: String = value.nfd().filter(|c| !is_diacritic(*c)).nfd().collect();
    if escape_for_regex {
        escape_regex(&stripped)
    } else {
        stripped
    }
}

/// Prefix every regex metacharacter in `value` with `\`.
pub fn escape_regex(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if REGEX_META.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Comparison form of a string: normalized, then lowercased.
///
/// Each folded character remembers which character of the source it came
/// from, so positions found in `text` can be mapped back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folded {
    /// Folded text
    pub text: String,
    /// Byte offset in `text` of each folded character, plus `text.len()`
    offsets: Vec<usize>,
    /// Source character index of each folded character
    origins: Vec<usize>,
}

impl Folded {
    /// Number of folded characters
    pub fn char_len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Source character index for the folded character at `idx`.
    ///
    /// `idx == char_len()` maps one past the last source character.
    pub fn origin(&self, idx: usize, source_len: usize) -> usize {
        self.origins.get(idx).copied().unwrap_or(source_len)
    }

    /// Folded character index of a byte offset into `text`
    pub fn char_at_byte(&self, byte_idx: usize) -> usize {
        match self.offsets.binary_search(&byte_idx) {
            Ok(i) => i,
            Err(pos) => pos.saturating_sub(1),
        }
    }

    fn push(&mut self, c: char, origin: usize) {
        self.offsets.push(self.text.len());
        self.origins.push(origin);
        self.text.push(c);
    }
}

/// Build the comparison form of `value`.
///
/// Lowercasing may itself produce combining marks (`İ` → `i̇`); those are
/// dropped as well.
pub fn fold(value: &str) -> Folded {
    let mut folded = Folded {
        text: String::with_capacity(value.len()),
        offsets: Vec::with_capacity(value.len() + 1),
        origins: Vec::with_capacity(value.len()),
    };

    for (origin, c) in value.chars().enumerate() {
        decompose_canonical(c, |d| {
            if is_diacritic(d) {
                return;
            }
            for lower in d.to_lowercase() {
                if !is_diacritic(lower) {
                    folded.push(lower, origin);
                }
            }
        });
    }

    folded.offsets.push(folded.text.len());
    folded
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
