// Fingerprint engine: frequency vectors, similarity, deltas and the
// structural deviation score.

pub mod compare;
pub mod deviation;
pub mod engine;
pub mod frequency;
pub mod record;
pub mod similarity;

pub use compare::{compare, Comparison};
pub use deviation::DeviationFormula;
pub use engine::FingerprintEngine;
pub use frequency::{
    compute_frequencies, nonletter_frequencies, stopword_frequencies, FrequencyVector, Unit,
};
pub use record::Fingerprint;
pub use similarity::{cosine_similarity, weighted_jaccard};
