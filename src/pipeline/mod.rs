// Multi-sample pipelines built on the fingerprint engine.
//
// - chunk: split long texts into fixed-size token runs
// - drift: fingerprint an ordered series and track neighbour similarity

pub mod chunk;
pub mod drift;

pub use chunk::chunk_texts;
pub use drift::{DriftSeries, DriftStep};
