// Frequency vectors: sparse token → relative frequency maps.
//
// Keys live in a BTreeMap: every sum over a vector must run in one fixed
// order for structural_deviation to be bit-reproducible across processes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::normalize::StopwordSet;

/// Which token unit a frequency vector is counted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Every char, including whitespace and punctuation
    Character,
    /// Whitespace-delimited words
    Word,
}

/// A sparse mapping from token to non-negative frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyVector(BTreeMap<String, f64>);

impl FrequencyVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn raw counts into relative frequencies (count / total).
    ///
    /// A zero total yields an empty vector instead of dividing by zero.
    pub fn from_counts(counts: BTreeMap<String, usize>) -> Self {
        let total: usize = counts.values().sum();
        Self::from_counts_over(counts, total)
    }

    /// Relative frequencies against an explicit denominator. Used when the
    /// counted tokens are a subset of a larger stream (stopwords, non-letter
    /// tokens) and the frequency should be relative to the whole stream.
    pub fn from_counts_over(counts: BTreeMap<String, usize>, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let total = total as f64;
        Self(
            counts
                .into_iter()
                .map(|(key, count)| (key, count as f64 / total))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all values, in key order.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.0.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// The `n` highest-valued entries, ties broken by key order.
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<(String, f64)> for FrequencyVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, f64>> for FrequencyVector {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Self(map)
    }
}

/// Count tokens into an ordered count map.
fn count<I, S>(tokens: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.into()).or_insert(0) += 1;
    }
    counts
}

/// Raw counts of `text` by `unit`.
pub fn count_tokens(text: &str, unit: Unit) -> BTreeMap<String, usize> {
    match unit {
        Unit::Character => count(text.chars().map(String::from)),
        Unit::Word => count(text.split_whitespace()),
    }
}

/// Relative frequency vector of `text` by `unit`. The text is used as given;
/// callers pass normalized text to get the normalized vector.
pub fn compute_frequencies(text: &str, unit: Unit) -> FrequencyVector {
    FrequencyVector::from_counts(count_tokens(text, unit))
}

/// Frequencies of stopwords in the raw word stream, relative to the total
/// number of raw words. Matching is exact: "The" is not "the".
pub fn stopword_frequencies(text: &str, stopwords: &StopwordSet) -> FrequencyVector {
    let words: Vec<&str> = text.split_whitespace().collect();
    let counts = count(words.iter().copied().filter(|w| stopwords.contains(w)));
    FrequencyVector::from_counts_over(counts, words.len())
}

/// Frequencies of whole raw tokens that aren't purely alphabetic ("Hello,",
/// "42", "--"), relative to the total number of raw words.
pub fn nonletter_frequencies(text: &str) -> FrequencyVector {
    let words: Vec<&str> = text.split_whitespace().collect();
    let counts = count(
        words
            .iter()
            .copied()
            .filter(|w| !w.chars().all(char::is_alphabetic)),
    );
    FrequencyVector::from_counts_over(counts, words.len())
}
