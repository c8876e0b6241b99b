//! Tests for matcher

use super::*;
use proptest::prelude::*;

#[test]
fn test_empty_query_returns_no_matches() {
    assert!(find_matches("Lisboa", "").is_empty());
}

#[test]
fn test_no_match_present() {
    assert!(find_matches("Lisboa", "xyz").is_empty());
}

#[test]
fn test_diacritic_insensitive() {
    assert_eq!(find_matches("São Paulo", "sao"), vec![MatchSpan::new(0, 3)]);
}

#[test]
fn test_accented_query_matches_plain_text() {
    assert_eq!(find_matches("Sao Paulo", "SÃO"), vec![MatchSpan::new(0, 3)]);
}

#[test]
fn test_case_insensitive_whole_string() {
    assert_eq!(find_matches("CASPER", "casper"), vec![MatchSpan::new(0, 6)]);
}

#[test]
fn test_multiple_matches() {
    assert_eq!(
        find_matches("abcabc", "abc"),
        vec![MatchSpan::new(0, 3), MatchSpan::new(3, 6)]
    );
}

#[test]
fn test_matches_do_not_overlap() {
    assert_eq!(
        find_matches("aaaaa", "aa"),
        vec![MatchSpan::new(0, 2), MatchSpan::new(2, 4)]
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    assert_eq!(find_matches("3.14 is pi", "."), vec![MatchSpan::new(1, 2)]);
    assert!(find_matches("abc", "a.c").is_empty());
    assert_eq!(find_matches("f(x) = [y]", "(x)"), vec![MatchSpan::new(1, 4)]);
}

#[test]
fn test_query_of_only_diacritics_matches_nothing() {
    assert!(find_matches("café", "\u{0301}").is_empty());
}

#[test]
fn test_decomposed_source_maps_to_original_positions() {
    // "Sa\u{0303}o Paulo" is 10 characters; 'P' is at index 5
    assert_eq!(
        find_matches("Sa\u{0303}o Paulo", "paulo"),
        vec![MatchSpan::new(5, 10)]
    );
}

#[test]
fn test_multibyte_positions_are_characters() {
    assert_eq!(
        find_matches("Évora e Óbidos", "obidos"),
        vec![MatchSpan::new(8, 14)]
    );
}

#[test]
fn test_hangul_spans_stay_inside_text() {
    // Each syllable decomposes into three jamo
    let spans = find_matches("한국", "국");
    assert_eq!(spans, vec![MatchSpan::new(1, 2)]);
}

#[test]
fn test_hangul_span_length_follows_decomposed_term() {
    // The span is as long as the decomposed term (three jamo), so it runs
    // past "국" into the next syllable
    assert_eq!(find_matches("한국어", "국"), vec![MatchSpan::new(1, 3)]);
    assert_eq!(
        Highlighter::new("국").segments("한국어"),
        vec![Segment::plain("한"), Segment::highlighted("국어")]
    );
}

#[test]
fn test_match_span_len() {
    let span = MatchSpan::new(3, 6);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert!(MatchSpan::new(4, 4).is_empty());
}

#[test]
fn test_contains_normalized() {
    assert!(contains_normalized("Câmara Municipal", "camara"));
    assert!(contains_normalized("Câmara Municipal", "MUNICÍPAL"));
    assert!(!contains_normalized("Câmara Municipal", "porto"));
    assert!(!contains_normalized("Câmara Municipal", ""));
}

#[test]
fn test_highlighter_reused_across_texts() {
    let highlighter = Highlighter::new("ão");
    assert_eq!(highlighter.term(), "ão");
    assert!(!highlighter.is_empty());
    assert_eq!(highlighter.find("Sao Joao"), vec![MatchSpan::new(1, 3), MatchSpan::new(6, 8)]);
    assert!(highlighter.is_match("Leão"));
    assert!(!highlighter.is_match("Porto"));
}

#[test]
fn test_highlighter_empty_term() {
    let highlighter = Highlighter::new("");
    assert!(highlighter.is_empty());
    assert!(highlighter.find("anything").is_empty());
    assert!(!highlighter.is_match("anything"));
}

#[test]
fn test_highlighter_segments() {
    let segments = Highlighter::new("porto").segments("Porto Alegre");
    assert_eq!(
        segments,
        vec![Segment::highlighted("Porto"), Segment::plain(" Alegre")]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_spans_ordered_and_in_bounds(
        text in "\\PC{0,40}",
        term in "\\PC{0,5}"
    ) {
        let spans = find_matches(&text, &term);
        let len = text.chars().count();
        let mut prev_end = 0;
        for span in &spans {
            prop_assert!(span.start >= prev_end);
            prop_assert!(span.start < span.end);
            prop_assert!(span.end <= len);
            prev_end = span.end;
        }
    }

    #[test]
    fn prop_ascii_substring_is_found(
        prefix in "[a-z ]{0,10}",
        needle in "[a-z]{1,5}",
        suffix in "[a-z ]{0,10}"
    ) {
        let text = format!("{prefix}{needle}{suffix}");
        let spans = find_matches(&text, &needle.to_uppercase());
        prop_assert!(!spans.is_empty());
        for span in &spans {
            let matched: String = text.chars().skip(span.start).take(span.len()).collect();
            prop_assert_eq!(matched, needle.clone());
        }
    }
}
