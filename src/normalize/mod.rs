// Text normalization: the canonical form behind every "normalized"
// frequency vector.
//
// Pipeline: trim, lowercase, punctuation to whitespace, split, singularize,
// drop stopwords, rejoin with single spaces. The output only ever contains
// lowercase alphanumerics separated by single spaces, which is what makes
// the pipeline a projection: normalize(normalize(t)) == normalize(t).

pub mod singular;
pub mod stopwords;

use std::sync::Arc;

use tracing::trace;

pub use singular::singularize;
pub use stopwords::{StopwordList, StopwordSet};

/// Canonicalizes raw text against an injected stopword set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Arc<StopwordSet>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopwordSet::builtin())
    }
}

impl Normalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    /// The stopword set this normalizer strips.
    pub fn stopwords(&self) -> &Arc<StopwordSet> {
        &self.stopwords
    }

    /// Normalize `text` into its canonical form. Returns an empty string when
    /// nothing survives.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.trim().to_lowercase();

        // Punctuation becomes a token boundary rather than vanishing, so
        // "end.start" splits into two words instead of fusing into one.
        let depunctuated: String = lowered
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        let survivors: Vec<String> = depunctuated
            .split_whitespace()
            .filter_map(|token| {
                let canonical = singularize(token);
                if self.stopwords.contains(token) || self.stopwords.contains(&canonical) {
                    None
                } else {
                    Some(canonical)
                }
            })
            .collect();

        trace!(
            input_chars = text.chars().count(),
            tokens = survivors.len(),
            "Normalized text"
        );

        survivors.join(" ")
    }
}

/// Normalize with the built-in stopword set.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}
