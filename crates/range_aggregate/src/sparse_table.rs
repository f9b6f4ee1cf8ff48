use std::ops::RangeBounds;

use log::debug;

use crate::error::{Error, Result, check_inclusive, check_index};
use crate::monoid::Idempotent;
use crate::util::{floor_log2_nonzero, to_half_open};

/// Static range fold in `O(1)` per query.
///
/// Row `k` stores the fold of every window of length `2^k`; a query combines
/// two windows that may overlap, hence the [`Idempotent`] bound.
#[derive(Clone, Debug)]
pub struct SparseTable<M: Idempotent> {
    monoid: M,
    n: usize,
    row_offsets: Vec<usize>,
    table: Vec<M::Value>,
}

impl<M: Idempotent> SparseTable<M> {
    pub fn from_values(monoid: M, values: Vec<M::Value>) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::InvalidArgument {
                reason: "sparse table needs at least one value",
            });
        }

        let levels = (floor_log2_nonzero(n) as usize) + 1;
        debug!("sparse table: {n} values, {levels} levels");

        let mut row_offsets = Vec::with_capacity(levels);
        let mut total_len = 0_usize;
        for k in 0..levels {
            row_offsets.push(total_len);
            total_len += n + 1 - (1_usize << k);
        }

        let mut table = Vec::with_capacity(total_len);
        table.extend(values);

        for k in 1..levels {
            let span = 1_usize << k;
            let half = span >> 1;
            let len = n + 1 - span;
            let prev_base = row_offsets[k - 1];
            debug_assert_eq!(table.len(), row_offsets[k]);

            for i in 0..len {
                let folded = monoid.combine(&table[prev_base + i], &table[prev_base + i + half]);
                table.push(folded);
            }
        }
        debug_assert_eq!(table.len(), total_len);

        Ok(Self {
            monoid,
            n,
            row_offsets,
            table,
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    pub fn get(&self, index: usize) -> Result<M::Value> {
        check_index(index, self.n)?;
        Ok(self.table[index].clone())
    }

    fn fold_half_open(&self, start: usize, end: usize) -> M::Value {
        if start == end {
            return self.monoid.identity();
        }
        let k = floor_log2_nonzero(end - start) as usize;
        let span = 1_usize << k;
        let base = self.row_offsets[k];
        self.monoid
            .combine(&self.table[base + start], &self.table[base + end - span])
    }

    /// Fold of `[left, right]`.
    pub fn query(&self, left: usize, right: usize) -> Result<M::Value> {
        let (start, end) = check_inclusive(left, right, self.n)?;
        Ok(self.fold_half_open(start, end))
    }

    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Value> {
        let (start, end) = to_half_open(&range, self.n)?;
        Ok(self.fold_half_open(start, end))
    }
}
