pub use chromosome::Chromosome;
pub use interval::Interval;

mod chromosome;
mod interval;
