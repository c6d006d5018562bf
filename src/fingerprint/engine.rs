// FingerprintEngine: turns one text into one Fingerprint.
//
// The engine owns nothing mutable: a Normalizer (which holds the shared
// stopword set) and the deviation formula. It's Send + Sync, so callers can
// fingerprint independent texts from as many threads as they like.

use std::sync::Arc;

use tracing::debug;

use super::deviation::DeviationFormula;
use super::frequency::{compute_frequencies, nonletter_frequencies, stopword_frequencies, Unit};
use super::record::{Fingerprint, Measurements};
use crate::normalize::{Normalizer, StopwordSet};

#[derive(Debug, Clone, Default)]
pub struct FingerprintEngine {
    normalizer: Normalizer,
    formula: DeviationFormula,
}

impl FingerprintEngine {
    pub fn new(stopwords: Arc<StopwordSet>, formula: DeviationFormula) -> Self {
        Self {
            normalizer: Normalizer::new(stopwords),
            formula,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn formula(&self) -> DeviationFormula {
        self.formula
    }

    /// Compute the full fingerprint of `text`.
    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        let normalized = self.normalizer.normalize(text);

        let measurements = Measurements {
            character_frequency: compute_frequencies(text, Unit::Character),
            normalized_character_frequency: compute_frequencies(&normalized, Unit::Character),
            word_frequency: compute_frequencies(text, Unit::Word),
            normalized_word_frequency: compute_frequencies(&normalized, Unit::Word),
            stopword_frequency: stopword_frequencies(text, self.normalizer.stopwords()),
            nonletter_frequency: nonletter_frequencies(text),
            character_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
        };

        let fingerprint = Fingerprint::assemble(measurements, self.formula);

        debug!(
            chars = fingerprint.character_count(),
            words = fingerprint.word_count(),
            cosine_char = fingerprint.cosine_similarity_char(),
            cosine_word = fingerprint.cosine_similarity_word(),
            deviation = fingerprint.structural_deviation(),
            "Computed fingerprint"
        );

        fingerprint
    }
}
