use derive_getters::Dissolve;
use eyre::{ensure, Result};

use crate::num::Coord;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// Interval is a contiguous stretch [start, end) of a chromosome.
/// Empty intervals (start == end) and intervals with negative length (start > end) are rejected
/// at construction, every instance is guaranteed to have `end > start`.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Interval<Idx: Coord> {
    start: Idx,
    end: Idx,
}

impl<Idx: Coord> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        ensure!(
            start < end,
            "Invalid interval: start ({start:?}) must be smaller than end ({end:?})"
        );
        Ok(Self { start, end })
    }

    #[inline(always)]
    pub fn start(&self) -> Idx {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> Idx {
        self.end
    }

    /// Length of the interval, always positive.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Idx {
        self.end - self.start
    }
}
