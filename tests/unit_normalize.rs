// Unit tests for text normalization.
//
// Tests the canonical-form pipeline: punctuation and case handling, stopword
// removal against built-in and injected sets, singularization, and the
// idempotence property over arbitrary input.

use std::sync::Arc;

use proptest::prelude::*;
use textprint::normalize::{normalize, singularize, Normalizer, StopwordList, StopwordSet};

// ============================================================
// normalize: concrete cases
// ============================================================

#[test]
fn hello_world_lowercases_and_strips_punctuation() {
    assert_eq!(normalize("Hello, World!"), "hello world");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(normalize("\n\t  Hello  \r\n"), "hello");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn punctuation_only_normalizes_to_empty() {
    assert_eq!(normalize("... !!! ??? -- ;;"), "");
}

#[test]
fn builtin_stopwords_removed_case_insensitively() {
    assert_eq!(normalize("THE Cat IS on The Mat"), "cat on mat");
}

#[test]
fn numbers_survive() {
    assert_eq!(normalize("Route 66, 1990s!"), "route 66 1990s");
}

#[test]
fn plurals_fold_to_one_root() {
    assert_eq!(normalize("Stories"), normalize("story"));
    assert_eq!(normalize("boxes"), normalize("box"));
    assert_eq!(normalize("words"), normalize("word"));
}

#[test]
fn output_has_single_spaces_only() {
    let out = normalize("alpha\t\tbeta\n\n\ngamma    delta");
    assert_eq!(out, "alpha beta gamma delta");
    assert!(!out.contains("  "));
}

// ============================================================
// Stopword sets: injection
// ============================================================

#[test]
fn english_list_strips_more_than_builtin() {
    let text = "We would have gone there if they had asked";
    let builtin = Normalizer::new(StopwordSet::for_list(StopwordList::Builtin)).normalize(text);
    let english = Normalizer::new(StopwordSet::for_list(StopwordList::English)).normalize(text);
    assert!(
        english.split(' ').count() < builtin.split(' ').count(),
        "english: {english:?}, builtin: {builtin:?}"
    );
}

#[test]
fn empty_stopword_set_keeps_everything() {
    let normalizer = Normalizer::new(Arc::new(StopwordSet::from_words(Vec::<String>::new())));
    assert_eq!(normalizer.normalize("the a an"), "the a an");
}

#[test]
fn normalizer_exposes_its_set() {
    let set = Arc::new(StopwordSet::from_words(["zzz"]));
    let normalizer = Normalizer::new(Arc::clone(&set));
    assert!(Arc::ptr_eq(normalizer.stopwords(), &set));
}

// ============================================================
// singularize: fixed points
// ============================================================

#[test]
fn singularize_leaves_short_tokens() {
    for word in ["is", "as", "bus", "gas", "yes"] {
        assert_eq!(singularize(word), word);
    }
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,80}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_on_wordy_text(text in "[A-Za-z ,.!?'-]{0,120}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_output_is_canonical(text in "\\PC{0,80}") {
        let out = normalize(&text);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c == ' ' || c.is_alphanumeric()));
    }

    #[test]
    fn singularize_is_idempotent(word in "[a-z]{0,12}") {
        let once = singularize(&word);
        prop_assert_eq!(singularize(&once), once);
    }
}
