use std::borrow::Borrow;
use std::fmt;
use std::ops::{AddAssign, MulAssign};

use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::math::vector::ZeroSpVec;

/// Pairwise similarity of a batch, N x N, row-major.
///
/// Always symmetric with a diagonal of exactly 1.0.
/// Serializes as a nested array `[[f64; N]; N]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Matrix of a lone document: `[[1.0]]`
    pub fn single() -> Self {
        Self { rows: vec![vec![1.0]] }
    }

    /// Cosine similarity of unit vectors (plain dot products)
    ///
    /// Each pair is computed once for `i <= j` and mirrored, then the diagonal is
    /// overwritten with 1.0 so float drift never reaches the ranker.
    /// Rows of the upper triangle are computed in parallel.
    ///
    /// # Arguments
    /// * `vectors` - L2-normalized document vectors of equal dimension
    pub fn from_vectors<N, V>(vectors: &[V]) -> Self
    where
        N: Num + AddAssign + MulAssign + Copy + Into<f64>,
        V: Borrow<ZeroSpVec<N>> + Sync,
    {
        let n = vectors.len();
        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let a = vectors[i].borrow();
                (i..n).map(|j| a.dot::<f64>(vectors[j].borrow())).collect()
            })
            .collect();

        let mut rows = vec![vec![0.0; n]; n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + offset;
                // rounding can push unit-vector dot products just past 1.0
                let sim = sim.clamp(0.0, 1.0);
                rows[i][j] = sim;
                rows[j][i] = sim;
            }
        }
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { rows }
    }

    /// Number of documents (rows)
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// # Panics
    /// if `i` or `j` is out of bounds
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sum of every row, self similarity included
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    pub fn all_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }

    /// Copy with every entry rounded to `decimals` places, for logging
    pub fn rounded(&self, decimals: u32) -> Self {
        let scale = 10_f64.powi(decimals as i32);
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|v| (v * scale).round() / scale).collect())
                .collect(),
        }
    }
}

impl fmt::Display for SimilarityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.precision$}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::vectorize;

    #[test]
    fn identical_documents_are_fully_similar() {
        let (vectors, _) = vectorize(&["cat dog", "cat dog"]);
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn disjoint_documents_are_zero() {
        let (vectors, _) = vectorize(&["apple banana", "xylophone zebra"]);
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn diagonal_is_forced_even_for_zero_vectors() {
        let (vectors, _) = vectorize(&["apple", ""]);
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn matrix_is_exactly_symmetric() {
        let (vectors, _) = vectorize(&[
            "graph neural network model",
            "neural language model",
            "graph database index",
            "index tuning model",
        ]);
        let m = SimilarityMatrix::from_vectors(&vectors);
        assert_eq!(m.len(), 4);
        assert!(m.is_symmetric());
        assert!(m.all_finite());
        for row in m.rows() {
            for &v in row {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn identical_documents_never_exceed_one() {
        let abstracts: Vec<String> = (1..200)
            .map(|k| {
                let words: Vec<String> = (0..k % 17 + 2).map(|w| format!("w{}x{}", (w * k) % 23, w % 5)).collect();
                words.join(" ")
            })
            .collect();
        for text in &abstracts {
            let (vectors, _) = vectorize(&[text.as_str(), text.as_str(), "unrelated zzz"]);
            let m = SimilarityMatrix::from_vectors(&vectors);
            assert!(m.get(0, 1) <= 1.0, "{} > 1.0 for {text}", m.get(0, 1));
            assert!(m.get(0, 1) > 0.999_999);
            assert!(m.is_symmetric());
        }
    }

    #[test]
    fn serializes_as_nested_rows() {
        let json = serde_json::to_string(&SimilarityMatrix::single()).unwrap();
        assert_eq!(json, "[[1.0]]");
    }

    #[test]
    fn rounded_and_display() {
        let (vectors, _) = vectorize(&["ab bc", "bc cd"]);
        let m = SimilarityMatrix::from_vectors(&vectors).rounded(2);
        let text = format!("{m}");
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("[1.00, "));
    }
}
