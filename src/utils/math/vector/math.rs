use std::{cmp::Ordering, ops::{AddAssign, MulAssign}};

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + AddAssign + MulAssign + Copy,
{
    /// ドット積を計算するメソッド
    ///
    /// # Arguments
    /// * `other` - 他のベクトル
    ///
    /// # Returns
    /// * `R` - ドット積の結果
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (self_inds, self_vals) = self.raw_parts();
        let (other_inds, other_vals) = other.raw_parts();

        if self_inds.is_empty() || other_inds.is_empty() {
            return result;
        }

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    result += self_vals[i].into() * other_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }

        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for (_, &val) in self.raw_iter() {
            let val: R = val.into();
            result += val * val;
        }
        result
    }

    /// 密ベクトルとの要素積
    /// 疎側の非ゼロ要素だけを掛けるので結果も同じ疎構造になります
    ///
    /// # Arguments
    /// * `dense` - 長さ `self.len()` の密ベクトル
    #[inline]
    pub fn hadamard_dense(&self, dense: &[N]) -> Self {
        debug_assert_eq!(
            self.len(),
            dense.len(),
            "Vectors must be of the same length to compute hadamard product."
        );

        let mut result = ZeroSpVec::with_capacity(self.nnz());
        for (ind, &val) in self.raw_iter() {
            let value = val * dense[ind];
            if value != N::zero() {
                result.raw_push(ind, value);
            }
        }
        result.add_dim(self.len());
        result
    }

    #[inline]
    pub fn scale(&mut self, factor: N) {
        for val in self.vals_mut() {
            *val *= factor;
        }
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float + AddAssign + MulAssign,
{
    /// L2ノルム
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq::<N>().sqrt()
    }

    /// L2正規化します ノルムが0 (全要素ゼロ) ならそのまま
    #[inline]
    pub fn normalize_l2(&mut self) {
        let norm = self.norm();
        if norm > N::zero() && norm.is_finite() {
            self.scale(N::one() / norm);
        }
    }
}
