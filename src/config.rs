use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::fingerprint::{DeviationFormula, FingerprintEngine};
use crate::normalize::{StopwordList, StopwordSet};

/// Default number of keys shown per vector in terminal summaries.
pub const DEFAULT_TOP_KEYS: usize = 10;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so any of these can live
/// there instead of the shell environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stopword list for normalization and stopword counting
    /// (TEXTPRINT_STOPWORDS: "builtin" or "english")
    pub stopwords: StopwordList,
    /// Structural deviation formula (TEXTPRINT_DEVIATION: "weighted" or "plain")
    pub deviation: DeviationFormula,
    /// Keys shown per vector in terminal output (TEXTPRINT_TOP_KEYS)
    pub top_keys: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stopwords: StopwordList::Builtin,
            deviation: DeviationFormula::Weighted,
            top_keys: DEFAULT_TOP_KEYS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Every variable is optional. A set but unrecognized value is an error
    /// rather than a silent fallback, so a typo can't change the numbers.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. `load` uses
    /// the process environment; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TEXTPRINT_STOPWORDS") {
            config.stopwords = match value.trim().to_lowercase().as_str() {
                "builtin" | "" => StopwordList::Builtin,
                "english" => StopwordList::English,
                other => anyhow::bail!(
                    "TEXTPRINT_STOPWORDS must be \"builtin\" or \"english\", got \"{other}\""
                ),
            };
        }

        if let Some(value) = lookup("TEXTPRINT_DEVIATION") {
            config.deviation = match value.trim().to_lowercase().as_str() {
                "weighted" | "" => DeviationFormula::Weighted,
                "plain" => DeviationFormula::Plain,
                other => anyhow::bail!(
                    "TEXTPRINT_DEVIATION must be \"weighted\" or \"plain\", got \"{other}\""
                ),
            };
        }

        if let Some(value) = lookup("TEXTPRINT_TOP_KEYS") {
            config.top_keys = value
                .trim()
                .parse()
                .with_context(|| format!("TEXTPRINT_TOP_KEYS must be a number, got \"{value}\""))?;
        }

        Ok(config)
    }

    /// The shared stopword set this configuration selects.
    pub fn stopword_set(&self) -> Arc<StopwordSet> {
        StopwordSet::for_list(self.stopwords)
    }

    /// Build the fingerprint engine this configuration describes.
    pub fn engine(&self) -> FingerprintEngine {
        FingerprintEngine::new(self.stopword_set(), self.deviation)
    }
}
