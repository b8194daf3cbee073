use ahash::HashMap;
use eyre::{ensure, Result};

use kinmap_core_rs::loc::Chromosome;

/// Country name -> number of votes. Absent countries have zero votes.
pub type Votes = HashMap<String, u32>;

/// Upper bounds for autosome lengths: the largest of the GRCh37 and GRCh38 assemblies.
/// Grids never depend on the observed data, every evaluation uses the same layout.
pub const CHROMOSOME_LENGTHS: [u64; Chromosome::COUNT] = [
    249_250_621,
    243_199_373,
    198_295_559,
    191_154_276,
    181_538_259,
    171_115_067,
    159_345_973,
    146_364_022,
    141_213_431,
    135_534_747,
    135_086_622,
    133_851_895,
    115_169_878,
    107_349_540,
    102_531_392,
    90_354_753,
    83_257_441,
    80_373_285,
    59_128_983,
    64_444_167,
    48_129_895,
    51_304_566,
];

/// Per-chromosome sequences of fixed-length bins, each holding country votes.
/// Bin `i` of a chromosome covers coordinates [i * bin_length, (i + 1) * bin_length).
#[derive(Clone, Debug)]
pub struct GenomeBinGrid {
    bin_length: u64,
    chromosomes: Vec<Vec<Votes>>,
}

impl GenomeBinGrid {
    pub fn new(bin_length: u64) -> Result<Self> {
        ensure!(bin_length > 0, "Bin length must be positive");

        let chromosomes = CHROMOSOME_LENGTHS
            .iter()
            .map(|length| vec![Votes::default(); length.div_ceil(bin_length) as usize])
            .collect();
        Ok(Self {
            bin_length,
            chromosomes,
        })
    }

    pub fn bin_length(&self) -> u64 {
        self.bin_length
    }

    pub fn bins(&self, chromosome: Chromosome) -> &[Votes] {
        &self.chromosomes[chromosome.index()]
    }

    /// Add a single vote for the country. Returns false if the bin is outside the chromosome.
    pub fn vote(&mut self, chromosome: Chromosome, bin: usize, country: &str) -> bool {
        match self.chromosomes[chromosome.index()].get_mut(bin) {
            None => false,
            Some(votes) => {
                match votes.get_mut(country) {
                    Some(cnt) => *cnt += 1,
                    None => {
                        votes.insert(country.to_owned(), 1);
                    }
                }
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Chromosome, &[Votes])> {
        Chromosome::all().zip(self.chromosomes.iter().map(|x| x.as_slice()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Chromosome, &mut [Votes])> {
        Chromosome::all().zip(self.chromosomes.iter_mut().map(|x| x.as_mut_slice()))
    }

    /// Number of bins with at least one vote.
    pub fn populated(&self) -> usize {
        self.chromosomes
            .iter()
            .flatten()
            .filter(|votes| !votes.is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chr(number: u8) -> Chromosome {
        Chromosome::new(number).unwrap()
    }

    #[test]
    fn test_grid_layout() {
        let grid = GenomeBinGrid::new(1_000_000).unwrap();
        assert_eq!(grid.bins(chr(1)).len(), 250);
        assert_eq!(grid.bins(chr(21)).len(), 49);
        assert_eq!(grid.bins(chr(22)).len(), 52);
        assert_eq!(grid.iter().count(), Chromosome::COUNT);
        assert_eq!(grid.populated(), 0);

        let grid = GenomeBinGrid::new(50_000_000).unwrap();
        assert_eq!(grid.bins(chr(1)).len(), 5);
        assert_eq!(grid.bins(chr(19)).len(), 2);

        assert!(GenomeBinGrid::new(0).is_err());
    }

    #[test]
    fn test_vote() {
        let mut grid = GenomeBinGrid::new(1_000_000).unwrap();
        assert!(grid.vote(chr(2), 10, "Italy"));
        assert!(grid.vote(chr(2), 10, "Italy"));
        assert!(grid.vote(chr(2), 10, "Greece"));
        assert!(grid.vote(chr(2), 11, "Italy"));
        assert!(!grid.vote(chr(22), 52, "Italy"));

        let bin = &grid.bins(chr(2))[10];
        assert_eq!(bin.get("Italy"), Some(&2));
        assert_eq!(bin.get("Greece"), Some(&1));
        assert_eq!(grid.populated(), 2);
        assert!(grid.bins(chr(3)).iter().all(|x| x.is_empty()));
    }
}
