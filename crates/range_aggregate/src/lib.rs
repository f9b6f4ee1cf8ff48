mod error;
mod fenwick;
mod recursive;
mod segment_tree;
mod sparse_table;
mod util;

pub mod monoid;

use std::ops::RangeBounds;

pub use error::{Error, Result};
pub use fenwick::FenwickTree;
pub use monoid::{
    BitAnd, BitOr, BitXor, Commutative, FnMonoid, Gcd, Group, Idempotent, Max, Min, Monoid, Sum,
};
pub use recursive::RecursiveSegmentTree;
pub use segment_tree::SegmentTree;
pub use sparse_table::SparseTable;

use crate::error::check_inclusive;

/// Point-update, range-query interface shared by the segment tree layouts.
///
/// - Indices are 0-based; [`query`](Self::query) takes an inclusive pair.
/// - Folds always combine lower indices on the left, so non-commutative
///   monoids are supported.
/// - A structure holds at least one leaf.
pub trait RangeAggregate: Sized {
    type Monoid: Monoid;

    /// `len` leaves, each set to the identity.
    fn with_len(monoid: Self::Monoid, len: usize) -> Result<Self>;

    /// Leaf `i` holds `values[i]`. Built in linear time.
    fn from_values(
        monoid: Self::Monoid,
        values: Vec<<Self::Monoid as Monoid>::Value>,
    ) -> Result<Self>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn monoid(&self) -> &Self::Monoid;

    /// Overwrites the value at `index`.
    fn set(&mut self, index: usize, value: <Self::Monoid as Monoid>::Value) -> Result<()>;

    /// Replaces the value at `index` with `combine(old, delta)`.
    fn accumulate(&mut self, index: usize, delta: <Self::Monoid as Monoid>::Value) -> Result<()>;

    /// Fold over any range; an empty in-bounds range yields the identity.
    fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<<Self::Monoid as Monoid>::Value>;

    fn get(&self, index: usize) -> Result<<Self::Monoid as Monoid>::Value> {
        self.fold(index..=index)
    }

    /// Fold over `[left, right]`. Fails unless `left <= right < len`.
    fn query(&self, left: usize, right: usize) -> Result<<Self::Monoid as Monoid>::Value> {
        check_inclusive(left, right, self.len())?;
        self.fold(left..=right)
    }
}
