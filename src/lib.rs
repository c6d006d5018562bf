// textprint: stylometric text fingerprints
//
// This is the library root. `normalize` and `fingerprint` are the engine;
// `pipeline` and `output` are built on top of it for the CLI.

pub mod config;
pub mod fingerprint;
pub mod normalize;
pub mod output;
pub mod pipeline;

pub use fingerprint::{
    compare, cosine_similarity, Comparison, DeviationFormula, Fingerprint, FingerprintEngine,
    FrequencyVector, Unit,
};
pub use normalize::{normalize, Normalizer, StopwordSet};
