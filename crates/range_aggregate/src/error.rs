use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Construction with zero length or no values.
    InvalidArgument { reason: &'static str },
    /// Requested half-open range `[start, end)` is reversed or exceeds `len`.
    OutOfRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfRange { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[inline(always)]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            start: index,
            end: index.saturating_add(1),
            len,
        })
    }
}

/// Validates an inclusive `[left, right]` pair and returns it half-open.
#[inline(always)]
pub(crate) fn check_inclusive(left: usize, right: usize, len: usize) -> Result<(usize, usize)> {
    let end = right.saturating_add(1);
    if left <= right && right < len {
        Ok((left, end))
    } else {
        Err(Error::OutOfRange {
            start: left,
            end,
            len,
        })
    }
}
