use std::collections::HashSet;

use once_cell::sync::Lazy;
use stop_words::{get, LANGUAGE};

/// NLTK English list. Entries with apostrophes never match after punctuation
/// stripping, they stay so the set is identical to the upstream list.
static ENGLISH: Lazy<StopWords> = Lazy::new(|| StopWords::from_words(get(LANGUAGE::English)));

/// Immutable stopword set
///
/// Built once and shared by reference; lookups need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<Box<str>>,
}

impl StopWords {
    /// Process-wide English set, built on first use
    pub fn english() -> &'static StopWords {
        &ENGLISH
    }

    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().into()).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
