use std::collections::BTreeSet;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

/// Length of a genome bin in base pairs.
pub const BIN_LENGTH: u64 = 1_000_000;
/// Segments longer than this indicate immediate family and cast no votes.
pub const MAX_MATCH_LENGTH: u64 = 20_000_000;
/// Minimal ratio between the top and the runner-up vote counts to resolve a bin.
pub const DOMINANCE_RATIO: f64 = 1.5;
/// Immigration countries, birthplaces there say little about the ancestral origin.
pub const EXCLUDED_COUNTRIES: [&str; 3] = ["USA", "Canada", "Australia"];

#[derive(Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Config {
    birth_country: Option<String>,
    excluded_countries: BTreeSet<String>,
    close_relative_threshold: u64,
    bin_length: u64,
    dominance_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            birth_country: None,
            excluded_countries: EXCLUDED_COUNTRIES.iter().map(|x| x.to_string()).collect(),
            close_relative_threshold: MAX_MATCH_LENGTH,
            bin_length: BIN_LENGTH,
            dominance_ratio: DOMINANCE_RATIO,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Birth country of the tested person. An empty name disables the reinforcement pass.
    pub fn set_birth_country(&mut self, country: impl AsRef<str>) -> &mut Self {
        let country = country.as_ref().trim();
        self.birth_country = (!country.is_empty()).then(|| country.to_owned());
        self
    }

    pub fn set_excluded_countries(
        &mut self,
        countries: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.excluded_countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude(&mut self, country: impl Into<String>) -> &mut Self {
        self.excluded_countries.insert(country.into());
        self
    }

    pub fn set_close_relative_threshold(&mut self, threshold: u64) -> &mut Self {
        self.close_relative_threshold = threshold;
        self
    }

    pub fn set_bin_length(&mut self, bin_length: u64) -> &mut Self {
        self.bin_length = bin_length;
        self
    }

    pub fn set_dominance_ratio(&mut self, ratio: f64) -> &mut Self {
        self.dominance_ratio = ratio;
        self
    }

    pub fn is_excluded(&self, country: &str) -> bool {
        self.excluded_countries.contains(country)
    }

    /// Country that receives the birth-country reinforcement, if any.
    pub fn reinforced_country(&self) -> Option<&str> {
        self.birth_country
            .as_deref()
            .filter(|country| !self.is_excluded(country))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.bin_length > 0, "Bin length must be positive");
        ensure!(
            self.dominance_ratio.is_finite() && self.dominance_ratio >= 1.0,
            "Dominance ratio must be a finite number >= 1.0, got {}",
            self.dominance_ratio
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.birth_country(), &None);
        assert!(config.is_excluded("USA"));
        assert!(config.is_excluded("Canada"));
        assert!(config.is_excluded("Australia"));
        assert!(!config.is_excluded("Germany"));
        assert_eq!(*config.close_relative_threshold(), 20_000_000);
        assert_eq!(*config.bin_length(), 1_000_000);
        assert_eq!(*config.dominance_ratio(), 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reinforced_country() {
        let mut config = Config::new();
        assert_eq!(config.reinforced_country(), None);

        config.set_birth_country("Poland");
        assert_eq!(config.reinforced_country(), Some("Poland"));

        config.set_birth_country("USA");
        assert_eq!(config.birth_country().as_deref(), Some("USA"));
        assert_eq!(config.reinforced_country(), None);

        config.set_excluded_countries(Vec::<String>::new());
        assert_eq!(config.reinforced_country(), Some("USA"));

        config.set_birth_country("  ");
        assert_eq!(config.birth_country(), &None);
    }

    #[test]
    fn test_birth_country_is_trimmed() {
        let mut config = Config::new();
        config.set_birth_country(" USA ");
        assert_eq!(config.birth_country().as_deref(), Some("USA"));
        assert_eq!(config.reinforced_country(), None);

        config.set_birth_country("\tPoland ");
        assert_eq!(config.reinforced_country(), Some("Poland"));
    }

    #[test]
    fn test_validate() {
        assert!(Config::new().set_bin_length(0).validate().is_err());
        assert!(Config::new().set_dominance_ratio(0.0).validate().is_err());
        assert!(Config::new().set_dominance_ratio(0.5).validate().is_err());
        assert!(Config::new().set_dominance_ratio(1.0).validate().is_ok());
        assert!(Config::new().set_dominance_ratio(f64::NAN).validate().is_err());
        assert!(Config::new()
            .set_bin_length(500_000)
            .set_dominance_ratio(2.0)
            .exclude("Brazil")
            .validate()
            .is_ok());
    }
}
