use once_cell::sync::Lazy;
use regex::Regex;

use super::stopwords::StopWords;

// Unicode decimal digits (Nd), not superscripts or fractions
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Text normalizer
///
/// lowercase -> drop punctuation -> drop digits -> whitespace split -> drop stopwords.
/// Punctuation is the ASCII punctuation set, digits are Unicode decimal digits.
/// An empty result is valid; callers decide what an all-empty batch means.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    stop_words: &'static StopWords,
}

impl Normalizer {
    /// Create a normalizer over an injected stopword set
    pub fn new(stop_words: &'static StopWords) -> Self {
        Self { stop_words }
    }

    /// Normalizer over the shared English stopword set
    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    /// Normalize text into space separated surviving tokens
    ///
    /// # Arguments
    /// * `text` - raw text
    ///
    /// # Returns
    /// * `String` - cleaned text, possibly empty
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    /// Same pipeline as `normalize`, returning the tokens
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        let stripped = DIGITS.replace_all(&stripped, "");
        stripped
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_owned)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}
