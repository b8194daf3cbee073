use std::fmt::Debug;
use std::hash::Hash;

/// Genomic coordinates are non-negative primitive integers
pub trait Coord: ::num::PrimInt + ::num::Unsigned + Hash + Debug + Default + Send + Sync {}

impl<T: ::num::PrimInt + ::num::Unsigned + Hash + Debug + Default + Send + Sync> Coord for T {}
