pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;
use std::ops::{AddAssign, MulAssign};

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{compare::SimilarityMatrix, corpus::Corpus, term::TermFrequency, tfidf::{DefaultTFIDFEngine, TFIDFEngine}}};

/// Batch TF-IDF vectorizer
///
/// Built in one shot from the cleaned texts of a batch and never updated afterwards.
/// Holds the batch vocabulary, the IDF vector and one L2-normalized TF-IDF vector per document.
///
/// - `N`: vector parameter type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + AddAssign + MulAssign + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Document vectors in input order
    pub documents: Vec<TFIDFVector<N>>,
    /// Batch vocabulary
    pub corpus: Corpus,
    /// IDF Vector
    pub idf_cache: IDFVector<N>,
    _marker: PhantomData<E>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TFIDFVector<N>
where
    N: Float,
{
    /// unit length, or all zero for a document without terms
    pub tfidf_vec: ZeroSpVec<N>,
    /// sum of tokens of this document
    pub token_sum: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IDFVector<N> {
    /// IDF Vector it is not sparse because every vocabulary term has a weight
    pub idf_vec: Vec<N>,
    /// document count
    pub doc_num: u64,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Float + AddAssign + MulAssign + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Vectorize cleaned documents
    ///
    /// # Arguments
    /// * `docs` - cleaned texts, whitespace separated terms; may be empty strings
    pub fn fit<S>(docs: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        let freqs: Vec<TermFrequency> = docs
            .par_iter()
            .map(|doc| TermFrequency::from_text(doc.as_ref()))
            .collect();
        let corpus = Corpus::from_documents(&freqs);
        let idf_vec = E::idf_vec(&corpus);

        let documents = freqs
            .par_iter()
            .map(|freq| {
                let mut tfidf_vec = E::tf_vec(freq, &corpus).hadamard_dense(&idf_vec);
                tfidf_vec.normalize_l2();
                tfidf_vec.shrink_to_fit();
                TFIDFVector {
                    tfidf_vec,
                    token_sum: freq.term_sum(),
                }
            })
            .collect();

        Self {
            documents,
            idf_cache: IDFVector {
                idf_vec,
                doc_num: corpus.get_doc_num(),
            },
            corpus,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// Document vectors in input order
    pub fn vectors(&self) -> impl Iterator<Item = &ZeroSpVec<N>> {
        self.documents.iter().map(|doc| &doc.tfidf_vec)
    }

    /// Pairwise cosine similarity of all documents
    pub fn similarity_matrix(&self) -> SimilarityMatrix
    where
        N: Into<f64>,
    {
        let vectors: Vec<&ZeroSpVec<N>> = self.vectors().collect();
        SimilarityMatrix::from_vectors(&vectors)
    }

    /// Split into (vectors, vocabulary)
    pub fn into_parts(self) -> (Vec<ZeroSpVec<N>>, Corpus) {
        let vectors = self.documents.into_iter().map(|doc| doc.tfidf_vec).collect();
        (vectors, self.corpus)
    }
}

/// Vectorize cleaned documents with the default engine
///
/// # Returns
/// * `(Vec<ZeroSpVec<f64>>, Corpus)` - one unit vector per document and the batch vocabulary
pub fn vectorize<S>(docs: &[S]) -> (Vec<ZeroSpVec<f64>>, Corpus)
where
    S: AsRef<str> + Sync,
{
    TFIDFVectorizer::<f64>::fit(docs).into_parts()
}
