use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TermFrequency;

/// Vocabulary of one batch
/// keeps the document count and, per term, the number of documents containing it.
/// A term's index is its position in the map.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// term -> document frequency
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build a vocabulary from per-document term frequencies
    /// Terms are sorted lexicographically so indices do not depend on input order
    pub fn from_documents(docs: &[TermFrequency]) -> Self {
        let mut corpus = Corpus::new();
        for doc in docs {
            let terms: Vec<&str> = doc.term_set_iter().collect();
            corpus.add_set(&terms);
        }
        corpus.sort_terms();
        corpus
    }

    /// Add a document's distinct terms to the corpus
    /// every entry of `terms` is counted once, pass each term at most once per document
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            match self.term_counts.get_mut(term.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.as_ref().into(), 1);
                }
            }
        }
    }

    /// Reassign indices in lexicographic term order
    pub fn sort_terms(&mut self) {
        self.term_counts.sort_keys();
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the document frequency of a term (0 when unknown)
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Index of a term in the vocabulary
    #[inline]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.term_counts.get_index(index).map(|(term, _)| term.as_ref())
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// (term, document frequency) in index order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }

    /// Get all terms in index order
    pub fn get_all_terms(&self) -> Vec<String> {
        self.term_counts.keys().map(|term| term.to_string()).collect()
    }
}
