/// This crate ranks a batch of short documents (title + abstract) by how unique
/// each one is relative to the others, using TF-IDF vectors and cosine similarity.
pub mod analyzer;
pub mod config;
pub mod error;
pub mod service;
pub mod text;
pub mod utils;
pub mod vectorizer;

/// Analyze a batch
/// The main entry point of this crate.
/// Takes two equal-length lists, titles and abstracts, and returns the pairwise
/// similarity matrix together with a uniqueness ranking.
///
/// Each call is independent: the vocabulary, vectors and matrix are built from
/// exactly the documents passed in and dropped afterwards.
///
/// `Analyzer<N, E>` exposes the same operation with a custom normalizer,
/// vector parameter type (`f32`, `f64`) or TF-IDF engine.
pub use analyzer::{analyze, AnalysisResult, Analyzer, Document};

/// Errors
/// - `ValidationError`: mismatched or empty input, or nothing left to analyze
/// - `AnalyzeError::Unexpected`: failures no validation anticipates
pub use error::{AnalyzeError, ValidationError};

/// Text Normalizer
/// Lowercases, strips punctuation and digits, drops English stopwords.
/// The stopword set is built once per process and shared read-only.
pub use text::{normalizer::Normalizer, stopwords::StopWords};

/// TF-IDF Vectorizer
/// Converts the cleaned texts of one batch into L2-normalized TF-IDF vectors.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: Vector parameter type (e.g., f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
pub use vectorizer::{vectorize, TFIDFVectorizer};

/// Corpus for TF-IDF Vectorizer
/// The vocabulary of one batch.
/// It does not store document text; it only manages:
/// - The number of documents
/// - The number of documents in which each term appears
/// - A lexicographically sorted term index
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Occurrence counts of each term within one document.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different weighting strategies
/// into `TFIDFVectorizer<N, E>`.
/// The default implementation, `DefaultTFIDFEngine`, uses raw term counts and a
/// smoothed IDF: `ln((1 + n) / (1 + df)) + 1`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Similarity Matrix
/// Pairwise cosine similarity, symmetric, diagonal fixed to 1.0.
pub use vectorizer::compare::SimilarityMatrix;

/// Ranking and UniquenessRecord structures
/// - `Ranking`: records ordered by rank, most unique first
/// - `UniquenessRecord`: original index, score, rank and abstract word count
/// - `UniquenessRanker`: derives a `Ranking` from a `SimilarityMatrix`
pub use vectorizer::evaluate::scoring::{Ranking, UniquenessRanker, UniquenessRecord};

/// Sparse vector used for document vectors
pub use utils::math::vector::ZeroSpVec;
