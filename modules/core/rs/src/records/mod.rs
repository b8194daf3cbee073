pub use join::{join, JoinedRow};
pub use matches::Match;
pub use segment::SharedSegment;

mod join;
mod matches;
mod segment;
