use num::{Float, FromPrimitive, Num};

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, term::TermFrequency}};

pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// IDFベクトルを生成するメソッド
    /// # Arguments
    /// * `corpus` - コーパス
    /// # Returns
    /// * `Vec<N>` - IDFベクトル (corpus の語彙インデックス順)
    fn idf_vec(corpus: &Corpus) -> Vec<N>;
    /// TFベクトルを生成するメソッド
    /// # Arguments
    /// * `freq` - 文書の出現頻度
    /// * `corpus` - 次元を決めるコーパス
    /// # Returns
    /// * `ZeroSpVec<N>` - 長さ `corpus.vocab_size()` の疎ベクトル
    fn tf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<N>;
}

/// デフォルトのTF-IDFエンジン
///
/// - tf: raw occurrence count
/// - idf: `ln((1 + n) / (1 + df)) + 1` (smoothed, always > 0)
///
/// Implemented for any float type (`f32`, `f64`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }

    /// smoothed idf for one term
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in the batch
    /// * `doc_freq` - number of documents containing the term
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float + FromPrimitive,
{
    fn idf_vec(corpus: &Corpus) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        corpus
            .iter()
            .map(|(_, doc_freq)| N::from_f64(Self::idf_calc(doc_num, doc_freq)).unwrap_or_else(N::zero))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, corpus: &Corpus) -> ZeroSpVec<N> {
        let entries: Vec<(usize, N)> = freq
            .iter()
            .filter_map(|(term, count)| {
                let index = corpus.term_index(term)?;
                Some((index, N::from_u64(count)?))
            })
            .collect();
        ZeroSpVec::from_entries(corpus.vocab_size(), entries)
    }
}
