// Stopword sets: the fixed vocabulary stripped by normalization and
// counted by the stopword frequency vector.
//
// A set is built once and shared by Arc. Nothing can add to or remove from
// it after construction, so every Normalizer and engine holding the same set
// produces identical output for identical input.

use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

use stop_words::{get, LANGUAGE};

/// The built-in list: articles, copulas and a few function words.
const BUILTIN_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "am", "was", "were", "be", "been", "being", "this", "that",
    "with", "of", "to", "in", "and", "or",
];

static BUILTIN: LazyLock<Arc<StopwordSet>> =
    LazyLock::new(|| Arc::new(StopwordSet::from_words(BUILTIN_WORDS.iter().copied())));

/// Which stopword list to build a set from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordList {
    /// The small fixed list (default)
    Builtin,
    /// The full English list from the `stop-words` crate
    English,
}

/// An immutable set of lowercase stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: BTreeSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Words are lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The process-wide built-in set. Constructed on first use, shared after.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// The English list shipped with the `stop-words` crate.
    pub fn english() -> Arc<Self> {
        let words: Vec<String> = get(LANGUAGE::English);
        Arc::new(Self::from_words(words))
    }

    /// Build the set for a configured list.
    pub fn for_list(list: StopwordList) -> Arc<Self> {
        match list {
            StopwordList::Builtin => Self::builtin(),
            StopwordList::English => Self::english(),
        }
    }

    /// Exact membership test. Callers decide whether to lowercase first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
