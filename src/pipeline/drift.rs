// Drift series: fingerprint an ordered sequence of snippets and measure how
// far each one moves from the one before it.
//
// Similarity between neighbours is the cosine of their normalized word
// vectors (vocabulary drift); the deviation change tracks structural drift.
// A sudden drop in similarity paired with a jump in deviation is the
// signature of a change of author.

use serde::Serialize;
use tracing::info;

use crate::fingerprint::{cosine_similarity, Fingerprint, FingerprintEngine};

/// One snippet's position in the series.
#[derive(Debug, Clone, Serialize)]
pub struct DriftStep {
    pub index: usize,
    pub fingerprint: Fingerprint,
    /// Cosine similarity to the previous step's normalized word vector.
    /// None for the first step.
    pub similarity_to_previous: Option<f64>,
    /// Change in structural deviation from the previous step (0.0 for the
    /// first step).
    pub deviation_change: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DriftSeries {
    pub steps: Vec<DriftStep>,
}

impl DriftSeries {
    /// Build a series from snippets in order.
    pub fn from_snippets<S: AsRef<str>>(engine: &FingerprintEngine, snippets: &[S]) -> Self {
        Self::from_snippets_with(engine, snippets, |_| {})
    }

    /// Same as `from_snippets`, calling `on_step` after each snippet is
    /// fingerprinted. The CLI uses this to drive a progress bar.
    pub fn from_snippets_with<S, F>(
        engine: &FingerprintEngine,
        snippets: &[S],
        mut on_step: F,
    ) -> Self
    where
        S: AsRef<str>,
        F: FnMut(&DriftStep),
    {
        let mut steps: Vec<DriftStep> = Vec::with_capacity(snippets.len());

        for (index, snippet) in snippets.iter().enumerate() {
            let fingerprint = engine.fingerprint(snippet.as_ref());

            let (similarity_to_previous, deviation_change) = match steps.last() {
                Some(prev) => (
                    Some(cosine_similarity(
                        prev.fingerprint.normalized_word_frequency(),
                        fingerprint.normalized_word_frequency(),
                    )),
                    fingerprint.structural_deviation() - prev.fingerprint.structural_deviation(),
                ),
                None => (None, 0.0),
            };

            let step = DriftStep {
                index,
                fingerprint,
                similarity_to_previous,
                deviation_change,
            };
            on_step(&step);
            steps.push(step);
        }

        let series = Self { steps };
        info!(
            steps = series.steps.len(),
            mean_similarity = series.mean_similarity().unwrap_or(0.0),
            "Built drift series"
        );
        series
    }

    /// Mean neighbour similarity across the series. None with fewer than two
    /// steps.
    pub fn mean_similarity(&self) -> Option<f64> {
        let sims: Vec<f64> = self
            .steps
            .iter()
            .filter_map(|s| s.similarity_to_previous)
            .collect();
        if sims.is_empty() {
            None
        } else {
            Some(sims.iter().sum::<f64>() / sims.len() as f64)
        }
    }

    /// The step with the lowest similarity to its predecessor, i.e. the most
    /// likely point of drift.
    pub fn sharpest_break(&self) -> Option<&DriftStep> {
        self.steps
            .iter()
            .filter(|s| s.similarity_to_previous.is_some())
            .min_by(|a, b| {
                a.similarity_to_previous
                    .partial_cmp(&b.similarity_to_previous)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
