// Similarity between frequency vectors.
//
// Cosine similarity is the primary comparison: it's what the fingerprint
// uses internally to measure how much normalization moved a text, and what
// callers use to line two fingerprints up against each other.
//
// Weighted Jaccard is the secondary overlap measure:
//
//   sum(min(a, b)) / sum(max(a, b))
//
// over the union of keys. It rewards shared mass rather than shared
// direction, so two samples that use the same vocabulary in different
// proportions score lower than they would under cosine.

use std::collections::BTreeSet;

use super::frequency::FrequencyVector;

/// Cosine similarity of two sparse vectors.
///
/// The dot product sums only over the keys of `v1`, looking each one up in
/// `v2` (missing keys count as 0). This is asymmetric in summation order:
/// `cosine_similarity(a, b)` and `cosine_similarity(b, a)` agree
/// mathematically but may differ in the last bits. Structural deviation is
/// defined against this exact order, so it stays.
///
/// Returns exactly 0.0 when either vector has zero magnitude. Otherwise the
/// result is clamped to [0, 1].
pub fn cosine_similarity(v1: &FrequencyVector, v2: &FrequencyVector) -> f64 {
    let dot: f64 = v1
        .iter()
        .map(|(key, value)| value * v2.get(key).unwrap_or(0.0))
        .sum();
    let mag1 = v1.magnitude();
    let mag2 = v2.magnitude();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    (dot / (mag1 * mag2)).clamp(0.0, 1.0)
}

/// Weighted Jaccard similarity over the union of keys.
///
/// Returns 0.0 when both vectors are empty or carry no mass.
pub fn weighted_jaccard(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    let all_keys: BTreeSet<&str> = a.keys().chain(b.keys()).collect();

    if all_keys.is_empty() {
        return 0.0;
    }

    let mut min_sum = 0.0;
    let mut max_sum = 0.0;

    for key in all_keys {
        let x = a.get(key).unwrap_or(0.0);
        let y = b.get(key).unwrap_or(0.0);
        min_sum += x.min(y);
        max_sum += x.max(y);
    }

    if max_sum == 0.0 {
        0.0
    } else {
        min_sum / max_sum
    }
}
