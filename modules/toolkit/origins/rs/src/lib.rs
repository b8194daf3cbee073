pub use config::Config;
pub use engine::{Engine, Evaluation};
pub use grid::{GenomeBinGrid, Votes};
pub use mapper::{MappingSummary, SegmentMapper};
pub use phasing::{phase, Inheritance, Phased};
pub use resolution::Dominance;
pub use result::{EthnicityRow, ResolvedEthnicity};

pub mod config;
mod engine;
pub mod grid;
mod mapper;
mod phasing;
pub mod resolution;
mod result;
