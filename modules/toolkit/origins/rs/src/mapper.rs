use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use kinmap_core_rs::records::JoinedRow;

use crate::config::Config;
use crate::grid::GenomeBinGrid;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Dissolve, Getters)]
pub struct MappingSummary {
    // Joined rows seen by the mapper
    segments: usize,
    // Votes placed on the grid by segments (the reinforcement pass is counted separately)
    votes: usize,
    // Rows skipped by the close-relative and excluded-country filters
    close_relatives: usize,
    excluded: usize,
    // Votes that fell past the end of the chromosome grid and were dropped
    out_of_range: usize,
    // Bins that received the birth-country vote
    reinforced: usize,
}

/// Distributes country votes from shared segments onto a genome grid.
#[derive(Clone, Copy, Debug, Constructor)]
pub struct SegmentMapper<'a> {
    config: &'a Config,
}

impl SegmentMapper<'_> {
    pub fn map<'r>(
        &self,
        grid: &mut GenomeBinGrid,
        rows: impl IntoIterator<Item = JoinedRow<'r, u64>>,
    ) -> MappingSummary {
        let mut summary = MappingSummary::default();
        let width = grid.bin_length();
        let threshold = *self.config.close_relative_threshold();

        for (relative, segment) in rows {
            summary.segments += 1;

            let interval = segment.interval();
            if interval.len() > threshold {
                summary.close_relatives += 1;
                continue;
            }

            let country = relative.country();
            if self.config.is_excluded(country) {
                summary.excluded += 1;
                continue;
            }

            // Scanning starts one bin past the bin holding `start`: a segment within a single
            // bin casts no votes.
            let first = interval.start().saturating_add(width) / width;
            let last = interval.end() / width;
            if first > last {
                continue;
            }

            let bins = grid.bins(*segment.chromosome()).len() as u64;
            if last >= bins {
                summary.out_of_range += (last - first.max(bins) + 1) as usize;
            }
            for bin in first..=last.min(bins - 1) {
                grid.vote(*segment.chromosome(), bin as usize, country);
                summary.votes += 1;
            }
        }

        summary.reinforced = self.reinforce(grid);

        if summary.out_of_range > 0 {
            log::warn!(
                "Dropped {} votes past the end of chromosome grids",
                summary.out_of_range
            );
        }
        log::debug!("Mapped shared segments: {summary:?}");
        summary
    }

    /// Add one vote for the birth country to every bin that already has votes.
    /// Skipped when the birth country is unset or excluded.
    pub fn reinforce(&self, grid: &mut GenomeBinGrid) -> usize {
        let Some(country) = self.config.reinforced_country() else {
            return 0;
        };

        let mut reinforced = 0;
        for (_, bins) in grid.iter_mut() {
            for votes in bins.iter_mut().filter(|x| !x.is_empty()) {
                *votes.entry(country.to_owned()).or_insert(0) += 1;
                reinforced += 1;
            }
        }
        reinforced
    }
}
