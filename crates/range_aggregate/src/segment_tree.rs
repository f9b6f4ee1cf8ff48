use std::ops::RangeBounds;

use log::debug;

use crate::RangeAggregate;
use crate::error::{Error, Result, check_index};
use crate::monoid::Monoid;
use crate::util::to_half_open;

/// Bottom-up segment tree.
///
/// Leaves live in `tree[n..2n]`; node `i` aggregates `2i` and `2i + 1`.
/// Any `n >= 1` works, not only powers of two.
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    monoid: M,
    n: usize,
    tree: Vec<M::Value>,
}

impl<M: Monoid> SegmentTree<M> {
    /// The logical array, in index order.
    pub fn leaves(&self) -> &[M::Value] {
        &self.tree[self.n..]
    }

    pub fn into_values(mut self) -> Vec<M::Value> {
        self.tree.split_off(self.n)
    }

    fn build(monoid: M, tree: Vec<M::Value>) -> Self {
        let n = tree.len() / 2;
        let mut this = Self { monoid, n, tree };
        for i in (1..n).rev() {
            this.tree[i] = this.monoid.combine(&this.tree[2 * i], &this.tree[2 * i + 1]);
        }
        this
    }

    #[inline]
    fn pull_from_leaf(&mut self, leaf: usize) {
        let mut i = leaf >> 1;
        while i >= 1 {
            self.tree[i] = self.monoid.combine(&self.tree[2 * i], &self.tree[2 * i + 1]);
            i >>= 1;
        }
    }

    fn fold_half_open(&self, start: usize, end: usize) -> M::Value {
        let mut l = start + self.n;
        let mut r = end + self.n;
        let mut left = self.monoid.identity();
        let mut right = self.monoid.identity();

        let tree = &self.tree;

        while l < r {
            if (l & 1) == 1 {
                left = self.monoid.combine(&left, &tree[l]);
                l += 1;
            }
            if (r & 1) == 1 {
                r -= 1;
                right = self.monoid.combine(&tree[r], &right);
            }
            l >>= 1;
            r >>= 1;
        }

        self.monoid.combine(&left, &right)
    }
}

impl<M: Monoid> RangeAggregate for SegmentTree<M> {
    type Monoid = M;

    fn with_len(monoid: M, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidArgument {
                reason: "segment tree needs at least one leaf",
            });
        }
        debug!("segment tree: {len} identity leaves");
        let tree = vec![monoid.identity(); 2 * len];
        Ok(Self {
            monoid,
            n: len,
            tree,
        })
    }

    fn from_values(monoid: M, values: Vec<M::Value>) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::InvalidArgument {
                reason: "segment tree needs at least one value",
            });
        }
        debug!("segment tree: building over {n} values");

        let mut tree = Vec::with_capacity(2 * n);
        tree.resize(n, monoid.identity());
        tree.extend(values);
        Ok(Self::build(monoid, tree))
    }

    fn len(&self) -> usize {
        self.n
    }

    fn monoid(&self) -> &M {
        &self.monoid
    }

    fn set(&mut self, index: usize, value: M::Value) -> Result<()> {
        check_index(index, self.n)?;
        let leaf = index + self.n;
        self.tree[leaf] = value;
        self.pull_from_leaf(leaf);
        Ok(())
    }

    fn accumulate(&mut self, index: usize, delta: M::Value) -> Result<()> {
        check_index(index, self.n)?;
        let leaf = index + self.n;
        self.tree[leaf] = self.monoid.combine(&self.tree[leaf], &delta);
        self.pull_from_leaf(leaf);
        Ok(())
    }

    fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Value> {
        let (start, end) = to_half_open(&range, self.n)?;
        Ok(self.fold_half_open(start, end))
    }

    fn get(&self, index: usize) -> Result<M::Value> {
        check_index(index, self.n)?;
        Ok(self.tree[index + self.n].clone())
    }
}
