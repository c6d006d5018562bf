// Per-key deltas and the structural deviation score.
//
// The canonical formula weights each axis's delta mass by how much of the
// raw stream is noise normalization removes:
//
//   cos_char * sum(char_delta) * sum(nonletter)
//     + cos_word * sum(word_delta) * sum(stopword)
//
// The plain variant drops the nonletter/stopword factors. One formula is
// picked per engine; the two are never mixed within a run.

use std::collections::BTreeMap;

use super::frequency::FrequencyVector;

/// Which structural deviation formula an engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviationFormula {
    /// Delta mass scaled by similarity and by the nonletter / stopword mass
    #[default]
    Weighted,
    /// Delta mass scaled by similarity only
    Plain,
}

/// The inputs the formula reads, all taken from one fingerprint.
#[derive(Debug, Clone, Copy)]
pub struct DeviationInputs {
    pub cosine_char: f64,
    pub cosine_word: f64,
    pub character_delta_mass: f64,
    pub word_delta_mass: f64,
    pub nonletter_mass: f64,
    pub stopword_mass: f64,
}

impl DeviationFormula {
    pub fn score(self, inputs: &DeviationInputs) -> f64 {
        match self {
            DeviationFormula::Weighted => {
                inputs.cosine_char * inputs.character_delta_mass * inputs.nonletter_mass
                    + inputs.cosine_word * inputs.word_delta_mass * inputs.stopword_mass
            }
            DeviationFormula::Plain => {
                inputs.cosine_char * inputs.character_delta_mass
                    + inputs.cosine_word * inputs.word_delta_mass
            }
        }
    }
}

/// `|raw[k] - normalized[k]|` for every key present in both vectors.
pub fn delta(raw: &FrequencyVector, normalized: &FrequencyVector) -> FrequencyVector {
    let mut out = BTreeMap::new();
    for (key, value) in raw.iter() {
        if let Some(other) = normalized.get(key) {
            out.insert(key.to_string(), (value - other).abs());
        }
    }
    out.into()
}
