use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::loc::{Chromosome, Interval};
use crate::num::Coord;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// A contiguous stretch of DNA shared with the match called `name`.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Constructor, Dissolve, Getters)]
pub struct SharedSegment<Idx: Coord> {
    name: String,
    chromosome: Chromosome,
    interval: Interval<Idx>,
}
