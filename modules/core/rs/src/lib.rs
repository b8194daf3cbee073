pub use error::Error;

mod error;
pub mod loc;
pub mod normalize;
pub mod num;
pub mod records;
