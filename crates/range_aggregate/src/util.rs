use std::ops::{Bound, RangeBounds};

use crate::error::{Error, Result};

#[inline(always)]
pub(crate) fn floor_log2_nonzero(x: usize) -> u32 {
    debug_assert!(x > 0);
    usize::BITS - 1 - x.leading_zeros()
}

/// Resolves `range` against `len` into a half-open `(start, end)`.
#[inline]
pub(crate) fn to_half_open<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end || end > len {
        return Err(Error::OutOfRange { start, end, len });
    }
    Ok((start, end))
}
