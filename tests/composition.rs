// Composition tests: verifying that the engine's pieces chain together.
//
// These tests exercise the data flow between modules:
//   Normalize -> Frequencies -> Fingerprint -> Compare / Drift
// with no filesystem or environment side effects.

use std::sync::Arc;
use std::thread;

use textprint::config::Config;
use textprint::fingerprint::{compare, Fingerprint, FingerprintEngine};
use textprint::normalize::{normalize, StopwordList};
use textprint::pipeline::{chunk_texts, DriftSeries};

const AUTHOR_A: &str = "I went down to the river this morning, and the water was cold. \
    The herons were out again; three of them stood on the far bank, watching.";
const AUTHOR_A_LATER: &str = "The river was high again this morning, and the herons were gone. \
    I stood on the bank a while, watching the water, and then walked home.";
const AUTHOR_B: &str = "QUARTERLY RESULTS: revenue up 12% YoY -- margins compressed!! \
    Guidance raised >> analysts expect EPS beat @ 3.4x";

// ============================================================
// Chain: normalize -> fingerprint
// ============================================================

#[test]
fn hello_world_end_to_end() {
    assert_eq!(normalize("Hello, World!"), "hello world");

    let fp = Fingerprint::from_text("Hello, World!");
    assert!((fp.character_frequency().total() - 1.0).abs() < 1e-12);
    assert!((fp.character_frequency().get("l").unwrap() - 3.0 / 13.0).abs() < 1e-12);

    // Raw words "Hello," and "World!" never appear in the normalized vector
    assert!(fp.word_delta().is_empty());
    assert_eq!(fp.cosine_similarity_word(), 0.0);

    // Both raw tokens carry punctuation
    assert!((fp.nonletter_frequency().total() - 1.0).abs() < 1e-12);
    assert!(fp.stopword_frequency().is_empty());

    // No stopwords: the weighted word term vanishes, but the char term doesn't
    assert!(fp.cosine_similarity_char() > 0.0);
    assert!(fp.structural_deviation() > 0.0);
}

// ============================================================
// Chain: fingerprint -> compare
// ============================================================

#[test]
fn same_author_closer_than_different_author() {
    let a = Fingerprint::from_text(AUTHOR_A);
    let a_later = Fingerprint::from_text(AUTHOR_A_LATER);
    let b = Fingerprint::from_text(AUTHOR_B);

    let same = compare(&a, &a_later);
    let different = compare(&a, &b);

    assert!(
        same.normalized_word_similarity > different.normalized_word_similarity,
        "same {} vs different {}",
        same.normalized_word_similarity,
        different.normalized_word_similarity
    );
    assert!(same.stopword_similarity > different.stopword_similarity);
    assert!(same.mean_similarity() > different.mean_similarity());
}

#[test]
fn comparison_serializes_every_axis() {
    let c = compare(
        &Fingerprint::from_text(AUTHOR_A),
        &Fingerprint::from_text(AUTHOR_B),
    );
    let value = serde_json::to_value(&c).unwrap();
    for field in [
        "character_similarity",
        "normalized_character_similarity",
        "word_similarity",
        "normalized_word_similarity",
        "stopword_similarity",
        "nonletter_similarity",
        "word_overlap",
        "deviation_gap",
    ] {
        assert!(value[field].is_number(), "missing {field}");
    }
}

// ============================================================
// Chain: config -> engine -> drift
// ============================================================

#[test]
fn configured_engine_drives_drift() {
    let config = Config {
        stopwords: StopwordList::English,
        ..Config::default()
    };
    let engine = config.engine();

    let text = format!("{AUTHOR_A} {AUTHOR_A_LATER} {AUTHOR_B}");
    let chunks = chunk_texts(&[text], 12).unwrap();
    let series = DriftSeries::from_snippets(&engine, &chunks);

    assert_eq!(series.len(), chunks.len());
    assert!(series.sharpest_break().is_some());
}

// ============================================================
// Concurrency: independent calls agree
// ============================================================

#[test]
fn parallel_fingerprints_match_sequential() {
    let engine = Arc::new(FingerprintEngine::default());
    let texts = [AUTHOR_A, AUTHOR_A_LATER, AUTHOR_B, "", "Hello, World!"];
    let sequential: Vec<Fingerprint> = texts.iter().map(|t| engine.fingerprint(t)).collect();

    let parallel: Vec<Fingerprint> = thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|t| {
                let engine = Arc::clone(&engine);
                s.spawn(move || engine.fingerprint(t))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
