use std::marker::PhantomData;
use std::ops::{AddAssign, MulAssign};

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{AnalyzeError, Result, ValidationError},
    text::normalizer::Normalizer,
    vectorizer::{compare::SimilarityMatrix, evaluate::scoring::{Ranking, UniquenessRanker}, term::terms, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, TFIDFVectorizer},
};

/// One submitted project, alive for a single call
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub abstract_text: String,
    /// `title + " " + abstract`
    pub combined: String,
    /// normalized `combined`
    pub cleaned: String,
    /// whitespace token count of the raw abstract
    pub abstract_length: usize,
}

impl Document {
    pub fn new(title: &str, abstract_text: &str, normalizer: &Normalizer) -> Self {
        let combined = format!("{title} {abstract_text}");
        let cleaned = normalizer.normalize(&combined);
        Self {
            title: title.to_owned(),
            abstract_text: abstract_text.to_owned(),
            abstract_length: abstract_text.split_whitespace().count(),
            combined,
            cleaned,
        }
    }

    /// No vocabulary terms survive cleaning
    #[inline]
    pub fn is_blank(&self) -> bool {
        terms(&self.cleaned).next().is_none()
    }
}

/// Output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// N x N, symmetric, diagonal 1.0
    pub similarity_matrix: SimilarityMatrix,
    /// ordered by rank ascending
    pub uniqueness_ranks: Ranking,
}

/// Similarity and uniqueness analysis over one batch of projects
///
/// Stateless between calls: every `analyze` builds its own vocabulary, vectors and matrix.
/// The only shared data is the normalizer's stopword set, which is read-only.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + AddAssign + MulAssign + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    normalizer: Normalizer,
    ranker: UniquenessRanker,
    _marker: PhantomData<(N, E)>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(Normalizer::english())
    }
}

impl<N, E> Analyzer<N, E>
where
    N: Float + AddAssign + MulAssign + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            ranker: UniquenessRanker::new(),
            _marker: PhantomData,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Check lengths, then build the per-call documents
    pub fn documents<T, A>(&self, titles: &[T], abstracts: &[A]) -> Result<Vec<Document>>
    where
        T: AsRef<str> + Sync,
        A: AsRef<str> + Sync,
    {
        if titles.len() != abstracts.len() {
            return Err(ValidationError::LengthMismatch {
                titles: titles.len(),
                abstracts: abstracts.len(),
            }
            .into());
        }
        if titles.is_empty() {
            return Err(ValidationError::Empty.into());
        }
        Ok(titles
            .par_iter()
            .zip(abstracts.par_iter())
            .map(|(title, abstract_text)| Document::new(title.as_ref(), abstract_text.as_ref(), &self.normalizer))
            .collect())
    }

    /// Compute the similarity matrix and uniqueness ranking of a batch
    ///
    /// # Arguments
    /// * `titles` - project titles
    /// * `abstracts` - project abstracts, same length as `titles`
    ///
    /// # Errors
    /// * `Validation` - mismatched or empty lists, or every document empty after cleaning (N > 1)
    /// * `Unexpected` - numeric breakdown such as non-finite similarities
    pub fn analyze<T, A>(&self, titles: &[T], abstracts: &[A]) -> Result<AnalysisResult>
    where
        T: AsRef<str> + Sync,
        A: AsRef<str> + Sync,
    {
        let documents = self.documents(titles, abstracts)?;
        let abstract_lengths: Vec<usize> = documents.iter().map(|doc| doc.abstract_length).collect();

        if documents.iter().all(Document::is_blank) {
            if documents.len() == 1 {
                debug!("single document without content, skipping vectorization");
                return Ok(AnalysisResult {
                    similarity_matrix: SimilarityMatrix::single(),
                    uniqueness_ranks: Ranking::single(abstract_lengths[0]),
                });
            }
            return Err(ValidationError::NoAnalyzableContent.into());
        }

        let cleaned: Vec<&str> = documents.iter().map(|doc| doc.cleaned.as_str()).collect();
        let vectorizer = TFIDFVectorizer::<N, E>::fit(&cleaned);
        debug!(docs = vectorizer.doc_num(), vocab = vectorizer.vocab_size(), "vectorized batch");

        let similarity_matrix = vectorizer.similarity_matrix();
        if !similarity_matrix.all_finite() {
            return Err(AnalyzeError::Unexpected("similarity matrix contains non-finite values".into()));
        }
        debug!("similarity matrix:\n{}", similarity_matrix.rounded(2));

        let uniqueness_ranks = self.ranker.rank(&similarity_matrix, &abstract_lengths)?;
        debug!("uniqueness ranks:\n{}", uniqueness_ranks);
        info!(
            docs = documents.len(),
            vocab = vectorizer.vocab_size(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            similarity_matrix,
            uniqueness_ranks,
        })
    }
}

/// Analyze a batch with the English normalizer and default engine
pub fn analyze<T, A>(titles: &[T], abstracts: &[A]) -> Result<AnalysisResult>
where
    T: AsRef<str> + Sync,
    A: AsRef<str> + Sync,
{
    Analyzer::<f64>::default().analyze(titles, abstracts)
}
