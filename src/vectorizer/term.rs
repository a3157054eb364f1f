use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Terms of a cleaned text
/// maximal runs of word characters at least two characters long,
/// single characters are never terms.
pub fn terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().nth(1).is_some())
}

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document.
/// Counts the number of times each term appears, in first-seen order.
///
/// # Examples
/// ```
/// use tf_idf_uniqueness::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("term1");
/// term_freq.add_term("term2");
/// term_freq.add_term("term1");
///
/// assert_eq!(term_freq.term_count("term1"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Build from already cleaned text, see [`terms`]
    /// An empty string yields an empty frequency table
    pub fn from_text(text: &str) -> Self {
        let mut freq = TermFrequency::new();
        for term in terms(text) {
            freq.add_term(term);
        }
        freq
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.to_string(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut freq = TermFrequency::new();
        freq.add_terms(terms);
        freq
    }
}

/// Implementation for retrieving information from TermFrequency
impl TermFrequency {
    /// Get iterator over all terms and their counts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the total count of all terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Arguments
    /// * `term` - term
    ///
    /// # Returns
    /// * `u64` - Occurrence count for the term, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Iterator over the distinct terms
    #[inline]
    pub fn term_set_iter(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }

    /// Get the number of unique terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_counts_repeats() {
        let freq = TermFrequency::from_text("rust fast rust  safe");
        assert_eq!(freq.term_count("rust"), 2);
        assert_eq!(freq.term_count("fast"), 1);
        assert_eq!(freq.term_count("slow"), 0);
        assert_eq!(freq.term_sum(), 4);
        assert_eq!(freq.term_num(), 3);
        assert_eq!(freq.term_set_iter().collect::<Vec<_>>(), vec!["rust", "fast", "safe"]);
    }

    #[test]
    fn single_characters_are_not_terms() {
        let freq = TermFrequency::from_text("b cat x dog");
        assert_eq!(freq.term_set_iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
        assert_eq!(terms("é ab ©cd").collect::<Vec<_>>(), vec!["ab", "cd"]);
    }

    #[test]
    fn empty_text_is_empty() {
        let freq = TermFrequency::from_text("");
        assert!(freq.is_empty());
        assert_eq!(freq.term_num(), 0);
    }

    #[test]
    fn from_slice_matches_add_terms() {
        let terms = ["a", "b", "a"];
        let freq = TermFrequency::from(&terms[..]);
        let mut manual = TermFrequency::new();
        manual.add_terms(&terms);
        assert_eq!(freq, manual);
    }
}
