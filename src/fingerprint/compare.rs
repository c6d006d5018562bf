// Pairwise comparison of two independent fingerprints.
//
// Each axis of the fingerprint gets its own cosine similarity so a caller
// can tell apart "same vocabulary" (normalized words) from "same habits"
// (raw characters, stopwords, punctuation-bearing tokens). The deviation gap
// is the absolute difference in structural deviation.

use serde::Serialize;

use super::record::Fingerprint;
use super::similarity::{cosine_similarity, weighted_jaccard};

/// The result of comparing fingerprint `a` against fingerprint `b`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub character_similarity: f64,
    pub normalized_character_similarity: f64,
    pub word_similarity: f64,
    pub normalized_word_similarity: f64,
    pub stopword_similarity: f64,
    pub nonletter_similarity: f64,
    /// Weighted Jaccard overlap of the normalized word vectors
    pub word_overlap: f64,
    pub deviation_gap: f64,
}

impl Comparison {
    /// Mean of the four frequency-axis similarities. A single number for
    /// ranking candidates; the individual axes carry the detail.
    pub fn mean_similarity(&self) -> f64 {
        (self.character_similarity
            + self.normalized_character_similarity
            + self.word_similarity
            + self.normalized_word_similarity)
            / 4.0
    }
}

/// Compare two fingerprints. `a` is the iterated side of every cosine.
pub fn compare(a: &Fingerprint, b: &Fingerprint) -> Comparison {
    Comparison {
        character_similarity: cosine_similarity(a.character_frequency(), b.character_frequency()),
        normalized_character_similarity: cosine_similarity(
            a.normalized_character_frequency(),
            b.normalized_character_frequency(),
        ),
        word_similarity: cosine_similarity(a.word_frequency(), b.word_frequency()),
        normalized_word_similarity: cosine_similarity(
            a.normalized_word_frequency(),
            b.normalized_word_frequency(),
        ),
        stopword_similarity: cosine_similarity(a.stopword_frequency(), b.stopword_frequency()),
        nonletter_similarity: cosine_similarity(a.nonletter_frequency(), b.nonletter_frequency()),
        word_overlap: weighted_jaccard(a.normalized_word_frequency(), b.normalized_word_frequency()),
        deviation_gap: (a.structural_deviation() - b.structural_deviation()).abs(),
    }
}
