use std::collections::BTreeMap;

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::Result;
use itertools::Itertools;

use kinmap_core_rs::Error;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct EthnicityRow {
    country: String,
    // Number of resolved bins won by the country
    count: u64,
    // Share of all resolved bins, 0-100
    percentage: f64,
}

/// Resolved bin counts per country. Derived once from a grid and never mutated.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, PartialEq, Eq, Debug, Default, Dissolve, Getters)]
pub struct ResolvedEthnicity {
    countries: BTreeMap<String, u64>,
    total: u64,
}

impl ResolvedEthnicity {
    pub fn new(countries: BTreeMap<String, u64>) -> Self {
        let total = countries.values().sum();
        Self { countries, total }
    }

    /// True when no bin was resolved.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, country: &str) -> u64 {
        self.countries.get(country).copied().unwrap_or(0)
    }

    /// Country rows sorted by count, ties broken by country name.
    /// Fails with [`Error::DivisionUndefined`] when nothing was resolved.
    pub fn rows(&self) -> Result<Vec<EthnicityRow>> {
        if self.is_empty() {
            return Err(Error::DivisionUndefined.into());
        }

        let total = self.total as f64;
        let rows = self
            .countries
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1))
            .map(|(country, &count)| {
                EthnicityRow::new(country.clone(), count, count as f64 / total * 100.0)
            })
            .collect();
        Ok(rows)
    }
}
