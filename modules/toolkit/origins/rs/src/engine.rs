use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPool;

use kinmap_core_rs::records::{join, JoinedRow, Match, SharedSegment};

use crate::config::Config;
use crate::grid::GenomeBinGrid;
use crate::mapper::{MappingSummary, SegmentMapper};
use crate::phasing::{phase, Inheritance};
use crate::resolution::Dominance;
use crate::result::ResolvedEthnicity;

#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Evaluation {
    ethnicity: ResolvedEthnicity,
    summary: MappingSummary,
}

pub struct Engine {
    config: Config,
    resolution: Dominance,
    thread_pool: Option<ThreadPool>,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let resolution = Dominance::new(*config.dominance_ratio());
        Ok(Self {
            config,
            resolution,
            thread_pool: None,
        })
    }

    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Estimate ethnicity from a single group of matches and their shared segments.
    pub fn evaluate<'a>(
        &self,
        matches: impl IntoIterator<Item = &'a Match>,
        segments: &'a [SharedSegment<u64>],
    ) -> Result<Evaluation> {
        let rows = join(matches, segments);
        match &self.thread_pool {
            Some(pool) => pool.install(|| self._evaluate(rows)),
            None => self._evaluate(rows),
        }
    }

    /// Phase the child's matches against one tested parent and evaluate each group separately.
    /// Results follow the order of [`Inheritance::ALL`].
    pub fn evaluate_trio(
        &self,
        child_matches: &[Match],
        child_segments: &[SharedSegment<u64>],
        parent_matches: &[Match],
    ) -> Result<Vec<(Inheritance, Evaluation)>> {
        let phased = phase(child_matches, parent_matches)?;
        let groups: Vec<_> = phased
            .groups()
            .map(|(inheritance, group)| (inheritance, join(group.iter().copied(), child_segments)))
            .collect();

        let run = || {
            groups
                .into_par_iter()
                .map(|(inheritance, rows)| -> Result<_> {
                    Ok((inheritance, self._evaluate(rows)?))
                })
                .collect::<Result<Vec<_>>>()
        };
        match &self.thread_pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn _evaluate(&self, rows: Vec<JoinedRow<'_, u64>>) -> Result<Evaluation> {
        // Each evaluation owns a fresh grid
        let mut grid = GenomeBinGrid::new(*self.config.bin_length())?;
        let summary = SegmentMapper::new(&self.config).map(&mut grid, rows);
        let ethnicity = self.resolution.resolve_grid(&grid);

        if ethnicity.is_empty() {
            log::warn!(
                "None of {} populated bins could be resolved to a single country",
                grid.populated()
            );
        }
        Ok(Evaluation::new(ethnicity, summary))
    }
}
