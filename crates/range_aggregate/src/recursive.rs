use std::ops::RangeBounds;

use log::debug;

use crate::RangeAggregate;
use crate::error::{Error, Result, check_index};
use crate::monoid::Monoid;
use crate::util::to_half_open;

const ROOT: usize = 1;

/// Top-down segment tree.
///
/// Node `v` covers an inclusive `[low, high]`, its children `2v` and
/// `2v + 1` split it at `mid = (low + high) / 2`. Storage is `4n`.
#[derive(Clone, Debug)]
pub struct RecursiveSegmentTree<M: Monoid> {
    monoid: M,
    n: usize,
    tree: Vec<M::Value>,
}

impl<M: Monoid> RecursiveSegmentTree<M> {
    fn build(&mut self, values: &[M::Value], node: usize, low: usize, high: usize) {
        if low == high {
            self.tree[node] = values[low].clone();
            return;
        }
        let mid = (low + high) >> 1;
        self.build(values, 2 * node, low, mid);
        self.build(values, 2 * node + 1, mid + 1, high);
        self.pull(node);
    }

    #[inline(always)]
    fn pull(&mut self, node: usize) {
        self.tree[node] = self.monoid.combine(&self.tree[2 * node], &self.tree[2 * node + 1]);
    }

    fn update<F>(&mut self, pos: usize, f: F, node: usize, low: usize, high: usize)
    where
        F: FnOnce(&M, &M::Value) -> M::Value,
    {
        if low == high {
            self.tree[node] = f(&self.monoid, &self.tree[node]);
            return;
        }
        let mid = (low + high) >> 1;
        if pos <= mid {
            self.update(pos, f, 2 * node, low, mid);
        } else {
            self.update(pos, f, 2 * node + 1, mid + 1, high);
        }
        self.pull(node);
    }

    fn fold_node(&self, l: usize, r: usize, node: usize, low: usize, high: usize) -> M::Value {
        if r < low || high < l {
            return self.monoid.identity();
        }
        if l <= low && high <= r {
            return self.tree[node].clone();
        }
        let mid = (low + high) >> 1;
        let left = self.fold_node(l, r, 2 * node, low, mid);
        let right = self.fold_node(l, r, 2 * node + 1, mid + 1, high);
        self.monoid.combine(&left, &right)
    }

    fn leaf(&self, pos: usize) -> &M::Value {
        let (mut node, mut low, mut high) = (ROOT, 0, self.n - 1);
        while low < high {
            let mid = (low + high) >> 1;
            if pos <= mid {
                node *= 2;
                high = mid;
            } else {
                node = 2 * node + 1;
                low = mid + 1;
            }
        }
        &self.tree[node]
    }
}

impl<M: Monoid> RangeAggregate for RecursiveSegmentTree<M> {
    type Monoid = M;

    fn with_len(monoid: M, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidArgument {
                reason: "segment tree needs at least one leaf",
            });
        }
        debug!("recursive segment tree: {len} identity leaves");
        let tree = vec![monoid.identity(); 4 * len];
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
        debug!("recursive segment tree: building over {n} values");

        let tree = vec![monoid.identity(); 4 * n];
        let mut this = Self { monoid, n, tree };
        this.build(&values, ROOT, 0, n - 1);
        Ok(this)
    }

    fn len(&self) -> usize {
        self.n
    }

    fn monoid(&self) -> &M {
        &self.monoid
    }

    fn set(&mut self, index: usize, value: M::Value) -> Result<()> {
        check_index(index, self.n)?;
        self.update(index, |_, _| value, ROOT, 0, self.n - 1);
        Ok(())
    }

    fn accumulate(&mut self, index: usize, delta: M::Value) -> Result<()> {
        check_index(index, self.n)?;
        self.update(
            index,
            |monoid, old| monoid.combine(old, &delta),
            ROOT,
            0,
            self.n - 1,
        );
        Ok(())
    }

    fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Value> {
        let (start, end) = to_half_open(&range, self.n)?;
        if start == end {
            return Ok(self.monoid.identity());
        }
        Ok(self.fold_node(start, end - 1, ROOT, 0, self.n - 1))
    }

    fn get(&self, index: usize) -> Result<M::Value> {
        check_index(index, self.n)?;
        Ok(self.leaf(index).clone())
    }
}
