use std::str::FromStr;

use derive_more::Display;
use eyre::{eyre, Report, Result};

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// Human autosome, numbered 1 to 22.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
#[display("chr{_0}")]
pub struct Chromosome(u8);

impl Chromosome {
    /// Number of autosomes covered by genome grids.
    pub const COUNT: usize = 22;

    pub fn new(number: u8) -> Result<Self> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(eyre!(
                "Invalid chromosome {number}, expected an autosome in 1..={}",
                Self::COUNT
            ))
        }
    }

    /// Chromosome number, 1-based.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Position of the chromosome in per-genome arrays, 0-based.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// All autosomes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT as u8).map(Self)
    }
}

impl FromStr for Chromosome {
    type Err = Report;

    /// Accepts bare numbers ("7") and UCSC-style names ("chr7", "Chr7").
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let number = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &trimmed[3..],
            _ => trimmed,
        };
        let number = number
            .parse::<u8>()
            .map_err(|_| eyre!("Invalid chromosome name: {s:?}"))?;
        Self::new(number)
    }
}
