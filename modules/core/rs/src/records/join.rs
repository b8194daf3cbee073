use ahash::HashMap;

use super::{Match, SharedSegment};
use crate::num::Coord;

pub type JoinedRow<'a, Idx> = (&'a Match, &'a SharedSegment<Idx>);

/// Inner join of matches and shared segments by name.
///
/// Rows are produced in the order of segments. Segments without a match are dropped, and a match
/// listed several times under the same name pairs with the segment once per listing.
pub fn join<'a, Idx: Coord>(
    matches: impl IntoIterator<Item = &'a Match>,
    segments: &'a [SharedSegment<Idx>],
) -> Vec<JoinedRow<'a, Idx>> {
    let mut index: HashMap<&'a str, Vec<&'a Match>> = HashMap::default();
    for item in matches {
        index.entry(item.name().as_str()).or_default().push(item);
    }

    let mut joined = Vec::with_capacity(segments.len());
    let mut orphans = 0usize;
    for segment in segments {
        match index.get(segment.name().as_str()) {
            Some(owners) => joined.extend(owners.iter().map(|owner| (*owner, segment))),
            None => orphans += 1,
        }
    }

    if orphans > 0 {
        log::debug!(
            "Dropped {orphans} of {} shared segments without a matching relative",
            segments.len()
        );
    }
    joined
}
