use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::{error::{AnalyzeError, Result}, vectorizer::compare::SimilarityMatrix};

/// One ranked document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniquenessRecord {
    /// position of the document in the input lists
    pub index: usize,
    /// uniqueness in [0, 1]
    pub score: f64,
    /// 1 = most unique
    pub rank: usize,
    /// whitespace token count of the raw abstract
    pub abstract_length: usize,
}

/// Structure to store ranked results
/// Ordered by rank ascending, i.e. by score descending.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    pub list: Vec<UniquenessRecord>,
}

impl Ranking {
    /// Rank documents by score
    ///
    /// Sorted by descending score; equal scores keep ascending original index.
    ///
    /// # Arguments
    /// * `scores` - uniqueness per document, input order
    /// * `abstract_lengths` - raw abstract word count per document, input order
    pub fn from_scores(scores: &[f64], abstract_lengths: &[usize]) -> Result<Self> {
        if scores.len() != abstract_lengths.len() {
            return Err(AnalyzeError::Unexpected(format!(
                "{} scores but {} abstract lengths",
                scores.len(),
                abstract_lengths.len()
            )));
        }
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then_with(|| a.cmp(&b)));

        let list = order
            .into_iter()
            .enumerate()
            .map(|(pos, index)| UniquenessRecord {
                index,
                score: scores[index],
                rank: pos + 1,
                abstract_length: abstract_lengths[index],
            })
            .collect();
        Ok(Ranking { list })
    }

    /// Ranking of a lone document
    pub fn single(abstract_length: usize) -> Self {
        Ranking {
            list: vec![UniquenessRecord {
                index: 0,
                score: 1.0,
                rank: 1,
                abstract_length,
            }],
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &UniquenessRecord> {
        self.list.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Record of the document at `index` in the input lists
    pub fn get_by_index(&self, index: usize) -> Option<&UniquenessRecord> {
        self.list.iter().find(|record| record.index == index)
    }

    /// Scores in rank order
    pub fn scores(&self) -> Vec<f64> {
        self.list.iter().map(|record| record.score).collect()
    }
}

impl Debug for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print: each record on a new line
            writeln!(f, "Ranking [")?;
            for record in &self.list {
                writeln!(
                    f,
                    "    #{} doc {}: {:.6} (len: {})",
                    record.rank, record.index, record.score, record.abstract_length
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.list {
            writeln!(
                f,
                "{:>3}. doc {:<4} score {:.4}  words {}",
                record.rank, record.index, record.score, record.abstract_length
            )?;
        }
        Ok(())
    }
}

/// Uniqueness per document, input order
///
/// `1 - mean similarity to the other documents`, NaN means treated as 0, clipped to [0, 1].
/// A lone document scores 1.0.
pub fn uniqueness_scores(matrix: &SimilarityMatrix) -> Vec<f64> {
    let n = matrix.len();
    if n == 1 {
        return vec![1.0];
    }
    let others = (n - 1) as f64;
    matrix
        .row_sums()
        .into_iter()
        .map(|sum| {
            // diagonal is exactly 1.0
            let mut avg = (sum - 1.0) / others;
            if avg.is_nan() {
                avg = 0.0;
            }
            (1.0 - avg).clamp(0.0, 1.0)
        })
        .collect()
}

/// Turns a similarity matrix into a ranking
#[derive(Debug, Default, Clone, Copy)]
pub struct UniquenessRanker;

impl UniquenessRanker {
    pub fn new() -> Self {
        UniquenessRanker
    }

    /// # Arguments
    /// * `matrix` - batch similarity matrix
    /// * `abstract_lengths` - raw abstract word counts, one per matrix row
    pub fn rank(&self, matrix: &SimilarityMatrix, abstract_lengths: &[usize]) -> Result<Ranking> {
        if matrix.is_empty() {
            return Err(AnalyzeError::Unexpected("cannot rank an empty similarity matrix".into()));
        }
        let scores = uniqueness_scores(matrix);
        Ranking::from_scores(&scores, abstract_lengths)
    }
}
