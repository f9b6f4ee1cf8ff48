use std::ops::RangeBounds;

use log::debug;

use crate::error::{Error, Result, check_inclusive, check_index};
use crate::monoid::Group;
use crate::util::to_half_open;

#[inline(always)]
fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Binary indexed tree over a commutative group.
///
/// Point accumulation and prefix folds in `O(log n)`; range folds subtract
/// two prefixes, which is why an inverse is required.
#[derive(Clone, Debug)]
pub struct FenwickTree<G: Group> {
    group: G,
    // 1-indexed; `tree[0]` stays at the identity.
    tree: Vec<G::Value>,
}

impl<G: Group> FenwickTree<G> {
    pub fn with_len(group: G, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidArgument {
                reason: "fenwick tree needs at least one slot",
            });
        }
        debug!("fenwick tree: {len} identity slots");
        let tree = vec![group.identity(); len + 1];
        Ok(Self { group, tree })
    }

    pub fn from_values(group: G, values: Vec<G::Value>) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::InvalidArgument {
                reason: "fenwick tree needs at least one value",
            });
        }
        debug!("fenwick tree: building over {n} values");

        let mut tree = Vec::with_capacity(n + 1);
        tree.push(group.identity());
        tree.extend(values);
        for i in 1..=n {
            let parent = i + lowest_bit(i);
            if parent <= n {
                let child = tree[i].clone();
                tree[parent] = group.combine(&tree[parent], &child);
            }
        }
        Ok(Self { group, tree })
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    /// Combines `delta` into the value at `index`.
    pub fn add(&mut self, index: usize, delta: G::Value) -> Result<()> {
        let n = self.len();
        check_index(index, n)?;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] = self.group.combine(&self.tree[i], &delta);
            i += lowest_bit(i);
        }
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: G::Value) -> Result<()> {
        let current = self.get(index)?;
        let delta = self.group.combine(&value, &self.group.inverse(&current));
        self.add(index, delta)
    }

    pub fn get(&self, index: usize) -> Result<G::Value> {
        self.query(index, index)
    }

    /// Fold of `[0, end)`.
    pub fn prefix(&self, end: usize) -> Result<G::Value> {
        let n = self.len();
        if end > n {
            return Err(Error::OutOfRange { start: 0, end, len: n });
        }
        Ok(self.prefix_unchecked(end))
    }

    fn prefix_unchecked(&self, end: usize) -> G::Value {
        let mut acc = self.group.identity();
        let mut i = end;
        while i > 0 {
            acc = self.group.combine(&acc, &self.tree[i]);
            i -= lowest_bit(i);
        }
        acc
    }

    fn fold_half_open(&self, start: usize, end: usize) -> G::Value {
        let upper = self.prefix_unchecked(end);
        let lower = self.prefix_unchecked(start);
        self.group.combine(&upper, &self.group.inverse(&lower))
    }

    /// Fold of `[left, right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<G::Value> {
        let (start, end) = check_inclusive(left, right, self.len())?;
        Ok(self.fold_half_open(start, end))
    }

    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<G::Value> {
        let (start, end) = to_half_open(&range, self.len())?;
        Ok(self.fold_half_open(start, end))
    }
}
