// Fingerprint: the immutable statistical summary of one text sample.
//
// Built in two phases by FingerprintEngine: the vectors measured from the
// text first, then the similarities, deltas and deviation derived from them.
// The record is assembled once from both and never changes afterwards. Fields
// are private; consumers read them through the accessors or the serialized
// JSON form.

use serde::Serialize;

use super::deviation::{delta, DeviationFormula, DeviationInputs};
use super::engine::FingerprintEngine;
use super::frequency::FrequencyVector;
use super::similarity::cosine_similarity;

/// A complete text fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fingerprint {
    character_frequency: FrequencyVector,
    normalized_character_frequency: FrequencyVector,
    word_frequency: FrequencyVector,
    normalized_word_frequency: FrequencyVector,
    cosine_similarity_char: f64,
    cosine_similarity_word: f64,
    stopword_frequency: FrequencyVector,
    nonletter_frequency: FrequencyVector,
    character_delta: FrequencyVector,
    word_delta: FrequencyVector,
    structural_deviation: f64,
    /// Raw character count the character frequencies were divided by
    character_count: usize,
    /// Raw word count the word, stopword and nonletter frequencies were
    /// divided by
    word_count: usize,
}

/// Phase one: everything measured directly from the text.
pub(crate) struct Measurements {
    pub character_frequency: FrequencyVector,
    pub normalized_character_frequency: FrequencyVector,
    pub word_frequency: FrequencyVector,
    pub normalized_word_frequency: FrequencyVector,
    pub stopword_frequency: FrequencyVector,
    pub nonletter_frequency: FrequencyVector,
    pub character_count: usize,
    pub word_count: usize,
}

impl Fingerprint {
    /// Fingerprint `text` with the default engine (built-in stopwords,
    /// weighted deviation).
    pub fn from_text(text: &str) -> Self {
        FingerprintEngine::default().fingerprint(text)
    }

    /// Phase two: derive similarities, deltas and deviation from the
    /// measurements, then assemble the record.
    pub(crate) fn assemble(m: Measurements, formula: DeviationFormula) -> Self {
        let cosine_similarity_char =
            cosine_similarity(&m.character_frequency, &m.normalized_character_frequency);
        let cosine_similarity_word =
            cosine_similarity(&m.word_frequency, &m.normalized_word_frequency);

        let character_delta = delta(&m.character_frequency, &m.normalized_character_frequency);
        let word_delta = delta(&m.word_frequency, &m.normalized_word_frequency);

        let structural_deviation = formula.score(&DeviationInputs {
            cosine_char: cosine_similarity_char,
            cosine_word: cosine_similarity_word,
            character_delta_mass: character_delta.total(),
            word_delta_mass: word_delta.total(),
            nonletter_mass: m.nonletter_frequency.total(),
            stopword_mass: m.stopword_frequency.total(),
        });

        Self {
            character_frequency: m.character_frequency,
            normalized_character_frequency: m.normalized_character_frequency,
            word_frequency: m.word_frequency,
            normalized_word_frequency: m.normalized_word_frequency,
            cosine_similarity_char,
            cosine_similarity_word,
            stopword_frequency: m.stopword_frequency,
            nonletter_frequency: m.nonletter_frequency,
            character_delta,
            word_delta,
            structural_deviation,
            character_count: m.character_count,
            word_count: m.word_count,
        }
    }

    pub fn character_frequency(&self) -> &FrequencyVector {
        &self.character_frequency
    }

    pub fn normalized_character_frequency(&self) -> &FrequencyVector {
        &self.normalized_character_frequency
    }

    pub fn word_frequency(&self) -> &FrequencyVector {
        &self.word_frequency
    }

    pub fn normalized_word_frequency(&self) -> &FrequencyVector {
        &self.normalized_word_frequency
    }

    pub fn cosine_similarity_char(&self) -> f64 {
        self.cosine_similarity_char
    }

    pub fn cosine_similarity_word(&self) -> f64 {
        self.cosine_similarity_word
    }

    pub fn stopword_frequency(&self) -> &FrequencyVector {
        &self.stopword_frequency
    }

    pub fn nonletter_frequency(&self) -> &FrequencyVector {
        &self.nonletter_frequency
    }

    pub fn character_delta(&self) -> &FrequencyVector {
        &self.character_delta
    }

    pub fn word_delta(&self) -> &FrequencyVector {
        &self.word_delta
    }

    pub fn structural_deviation(&self) -> f64 {
        self.structural_deviation
    }

    pub fn character_count(&self) -> usize {
        self.character_count
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True when the source text had no characters at all.
    pub fn is_empty(&self) -> bool {
        self.character_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let fp = Fingerprint::from_text("");
        assert!(fp.is_empty());
        assert!(fp.character_frequency().is_empty());
        assert!(fp.normalized_character_frequency().is_empty());
        assert!(fp.word_frequency().is_empty());
        assert!(fp.normalized_word_frequency().is_empty());
        assert!(fp.stopword_frequency().is_empty());
        assert!(fp.nonletter_frequency().is_empty());
        assert!(fp.character_delta().is_empty());
        assert!(fp.word_delta().is_empty());
        assert_eq!(fp.cosine_similarity_char(), 0.0);
        assert_eq!(fp.cosine_similarity_word(), 0.0);
        assert_eq!(fp.structural_deviation(), 0.0);
    }

    #[test]
    fn test_all_stopwords_degenerates_on_normalized_side() {
        let fp = Fingerprint::from_text("the a an");
        assert!(!fp.word_frequency().is_empty());
        assert!(fp.normalized_word_frequency().is_empty());
        assert_eq!(fp.cosine_similarity_word(), 0.0);
        assert!(fp.word_delta().is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let fp = Fingerprint::from_text("Hello, World!");
        let value = serde_json::to_value(&fp).unwrap();
        for field in [
            "character_frequency",
            "normalized_character_frequency",
            "word_frequency",
            "normalized_word_frequency",
            "cosine_similarity_char",
            "cosine_similarity_word",
            "stopword_frequency",
            "nonletter_frequency",
            "character_delta",
            "word_delta",
            "structural_deviation",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["character_frequency"]["l"], 3.0 / 13.0);
    }

    #[test]
    fn test_equal_text_equal_record() {
        let text = "Stories about classes, churches & boxes!!";
        assert_eq!(Fingerprint::from_text(text), Fingerprint::from_text(text));
    }
}
