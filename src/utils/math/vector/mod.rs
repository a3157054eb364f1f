pub mod math;

use std::fmt::{self, Debug};

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVecは0要素を疎とした疎ベクトルの実装です
/// indices と values を持ち
/// indicesは非ゼロ要素のインデックスを保持し、
/// valuesは要素の値を保持します
///
/// 要素はindicesの昇順でソートされていることを保証します
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num,
{
    /// raw_pushは、要素を末尾に追加するためのメソッドです。
    /// indexは既存の最後のインデックスより大きい必要があります。
    /// lenは更新しません。
    #[inline]
    pub(crate) fn raw_push(&mut self, index: usize, value: N) {
        debug_assert!(
            self.inds.last().map_or(true, |&last| last < index),
            "indices must be pushed in ascending order"
        );
        self.inds.push(index);
        self.vals.push(value);
    }

    #[inline]
    fn ind_binary_search(&self, index: &usize) -> Result<usize, usize> {
        self.inds.binary_search(index)
    }

    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// 長さ `len` のベクトルを (index, value) の組から作成します
    /// 順不同で渡してよく、ゼロ値は捨てられます
    ///
    /// # Arguments
    /// * `len` - ベクトルの次元
    /// * `entries` - (index, value) の組
    ///
    /// # Panics
    /// debugビルドで index が `len` 以上、もしくは重複している場合
    pub fn from_entries(len: usize, mut entries: Vec<(usize, N)>) -> Self {
        entries.sort_unstable_by_key(|(ind, _)| *ind);
        let mut vec = ZeroSpVec::with_capacity(entries.len());
        for (ind, val) in entries {
            debug_assert!(ind < len, "index {ind} out of bounds for length {len}");
            if val != N::zero() {
                vec.raw_push(ind, val);
            }
        }
        vec.len = len;
        vec
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// ゼロ次元を `dim` 個末尾に追加します
    #[inline]
    pub fn add_dim(&mut self, dim: usize) {
        self.len += dim;
    }

    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            let index = self.len;
            self.raw_push(index, elem);
        }
        self.len += 1;
    }

    /// indexの値を取得します 範囲外なら None
    #[inline]
    pub fn get(&self, index: usize) -> Option<N>
    where
        N: Copy,
    {
        if index >= self.len {
            return None;
        }
        match self.ind_binary_search(&index) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    #[inline]
    pub fn from_vec(vec: Vec<N>) -> Self {
        let mut sp = ZeroSpVec::with_capacity(vec.len());
        for elem in vec {
            sp.push(elem);
        }
        sp
    }

    /// 全要素 (ゼロ含む) を返すイテレータ
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = N> + '_
    where
        N: Copy,
    {
        (0..self.len).map(move |i| self.get(i).unwrap_or_else(N::zero))
    }

    /// 非ゼロ要素のみ (index, &value) で返すイテレータ
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub(crate) fn raw_parts(&self) -> (&[usize], &[N]) {
        (&self.inds, &self.vals)
    }

    #[inline]
    pub(crate) fn vals_mut(&mut self) -> &mut [N] {
        &mut self.vals
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    fn default() -> Self {
        ZeroSpVec::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    fn from(vec: Vec<N>) -> Self {
        ZeroSpVec::from_vec(vec)
    }
}

impl<N: Num + Debug + Copy> Debug for ZeroSpVec<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(len: {}, ", self.len)?;
            f.debug_map().entries(self.raw_iter()).finish()?;
            write!(f, ")")
        } else {
            f.debug_list().entries(self.iter()).finish()
        }
    }
}
