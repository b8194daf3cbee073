use ahash::HashMap;
use rayon::prelude::*;

use crate::config::DOMINANCE_RATIO;
use crate::grid::{GenomeBinGrid, Votes};
use crate::result::ResolvedEthnicity;

/// Resolves a bin to the country with the most votes if it dominates the runner-up.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Dominance {
    ratio: f64,
}

impl Default for Dominance {
    fn default() -> Self {
        Self {
            ratio: DOMINANCE_RATIO,
        }
    }
}

impl Dominance {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Single pass over the votes tracking the leader, its count and the runner-up count.
    ///
    /// A value above `top` demotes the current top to `second`; otherwise a value above `second`
    /// replaces it. Ties at the maximum therefore end up with `second == top`, whatever the
    /// iteration order. Returns `None` for bins without a positive vote.
    pub fn top_two(votes: &Votes) -> Option<(&str, u32, u32)> {
        let (winner, top, second) = votes.iter().fold(
            (None, 0u32, 0u32),
            |(winner, top, second), (country, &value)| {
                if value > top {
                    (Some(country.as_str()), value, top)
                } else if value > second {
                    (winner, top, value)
                } else {
                    (winner, top, second)
                }
            },
        );
        winner.map(|winner| (winner, top, second))
    }

    /// Ties at the maximum are never resolved, whatever the ratio.
    pub fn resolve<'v>(&self, votes: &'v Votes) -> Option<&'v str> {
        let (winner, top, second) = Self::top_two(votes)?;
        if second == top {
            None
        } else if second == 0 || top as f64 / second as f64 >= self.ratio {
            Some(winner)
        } else {
            None
        }
    }

    /// Resolve every bin of the grid and count winners per country.
    pub fn resolve_grid(&self, grid: &GenomeBinGrid) -> ResolvedEthnicity {
        let chromosomes: Vec<_> = grid.iter().collect();
        let counts = chromosomes
            .par_iter()
            .map(|(_, bins)| {
                let mut counts: HashMap<&str, u64> = HashMap::default();
                for winner in bins.iter().filter_map(|votes| self.resolve(votes)) {
                    *counts.entry(winner).or_default() += 1;
                }
                counts
            })
            .reduce(HashMap::default, |mut left, right| {
                for (country, cnt) in right {
                    *left.entry(country).or_default() += cnt;
                }
                left
            });

        ResolvedEthnicity::new(
            counts
                .into_iter()
                .map(|(country, cnt)| (country.to_owned(), cnt))
                .collect(),
        )
    }
}
