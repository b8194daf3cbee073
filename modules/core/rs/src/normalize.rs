//! Normalization of raw match/segment rows into the record model.
//!
//! Raw rows are string fields exactly as they come from a tabular export. Rows with an empty
//! field are dropped, numeric fields are parsed, and display names are disambiguated so that
//! different people sharing a display name become distinct records:
//! * matches: the k-th occurrence of a name (k >= 2) is renamed to `name` + `k`;
//! * segments: consecutive rows of one name form a block owned by one person. A name that
//!   reappears after another name interrupted it starts a new block and gets the next suffix.
//!
//! Both rules assign suffixes in order of appearance, so segment blocks line up with the matches
//! exported in the same order.

use ahash::HashMap;
use eyre::Result;

use crate::error::Error;
use crate::loc::{Chromosome, Interval};
use crate::records::{Match, SharedSegment};

/// Assigns unique names to repeated display names within one ingestion pass.
#[derive(Clone, Debug, Default)]
pub struct Disambiguator {
    seen: HashMap<String, usize>,
}

impl Disambiguator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, name: &str) -> String {
        let count = self.seen.entry(name.to_owned()).or_insert(0);
        *count += 1;
        match *count {
            1 => name.to_owned(),
            n => format!("{name}{n}"),
        }
    }
}

pub mod parse {
    use super::*;

    pub(super) fn malformed(row: usize, field: &'static str, value: &str) -> eyre::Report {
        Error::Ingestion {
            row,
            field,
            value: value.to_owned(),
        }
        .into()
    }

    pub fn centimorgans(row: usize, value: &str) -> Result<f64> {
        match value.parse::<f64>() {
            Ok(cm) if cm.is_finite() && cm >= 0.0 => Ok(cm),
            _ => Err(malformed(row, "sharedCM", value)),
        }
    }

    /// Parse an autosome. Sex chromosomes and mtDNA are valid inputs without a place in the
    /// genome grid, they are reported as `None`.
    pub fn chromosome(row: usize, value: &str) -> Result<Option<Chromosome>> {
        let lowercase = value.to_ascii_lowercase();
        let name = lowercase.strip_prefix("chr").unwrap_or(&lowercase);
        match name {
            "x" | "y" | "xy" | "m" | "mt" => Ok(None),
            _ => value
                .parse::<Chromosome>()
                .map(Some)
                .map_err(|_| malformed(row, "chromosome", value)),
        }
    }

    pub fn coordinate(row: usize, field: &'static str, value: &str) -> Result<u64> {
        value
            .parse::<u64>()
            .map_err(|_| malformed(row, field, value))
    }
}

/// Normalize `[name, country, sharedCM]` rows into matches.
pub fn normalize_matches<S: AsRef<str>>(
    rows: impl IntoIterator<Item = [S; 3]>,
) -> Result<Vec<Match>> {
    let mut names = Disambiguator::new();
    let mut matches = Vec::new();
    let mut dropped = 0usize;

    for (row, fields) in rows.into_iter().enumerate() {
        let [name, country, cm] = fields.each_ref().map(|x| x.as_ref().trim());
        if name.is_empty() || country.is_empty() || cm.is_empty() {
            dropped += 1;
            continue;
        }

        let shared_cm = parse::centimorgans(row, cm)?;
        matches.push(Match::new(
            names.assign(name),
            country.to_owned(),
            shared_cm,
        ));
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} match rows with empty fields");
    }
    Ok(matches)
}

/// Normalize `[name, chromosome, start, end]` rows into shared segments.
pub fn normalize_segments<S: AsRef<str>>(
    rows: impl IntoIterator<Item = [S; 4]>,
) -> Result<Vec<SharedSegment<u64>>> {
    let mut names = Disambiguator::new();
    // (display name, assigned name) of the current block
    let mut block: Option<(String, String)> = None;
    let mut segments = Vec::new();
    let (mut dropped, mut unplaced) = (0usize, 0usize);

    for (row, fields) in rows.into_iter().enumerate() {
        let [name, chromosome, start, end] = fields.each_ref().map(|x| x.as_ref().trim());
        if name.is_empty() || chromosome.is_empty() || start.is_empty() || end.is_empty() {
            dropped += 1;
            continue;
        }

        let owner = match &block {
            Some((display, assigned)) if display == name => assigned.clone(),
            _ => {
                let assigned = names.assign(name);
                block = Some((name.to_owned(), assigned.clone()));
                assigned
            }
        };

        let Some(chromosome) = parse::chromosome(row, chromosome)? else {
            unplaced += 1;
            continue;
        };
        let interval = Interval::new(
            parse::coordinate(row, "start", start)?,
            parse::coordinate(row, "end", end)?,
        )
        .map_err(|_| parse::malformed(row, "end", end))?;

        segments.push(SharedSegment::new(owner, chromosome, interval));
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} segment rows with empty fields");
    }
    if unplaced > 0 {
        log::info!("Skipped {unplaced} segments on sex chromosomes or mtDNA");
    }
    Ok(segments)
}
