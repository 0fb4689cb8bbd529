//! Seed records bundled under `assets/seed/`, standing in for a backend.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    domain::{
        AppState, Contract, Currency, FreightRate, PackageUnit, Task, Terminal,
    },
    util::assets,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed file {0} is missing")]
    Missing(&'static str),
    #[error("seed file {file} is malformed: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub rates: Vec<FreightRate>,
    pub terminals: Vec<Terminal>,
    pub currencies: Vec<Currency>,
    pub package_units: Vec<PackageUnit>,
    pub tasks: Vec<Task>,
    pub contracts: Vec<Contract>,
}

impl SeedData {
    pub fn load() -> Result<Self, SeedError> {
        let seed = Self {
            rates: load_seed("rates.json")?,
            terminals: load_seed("terminals.json")?,
            currencies: load_seed("currencies.json")?,
            package_units: load_seed("package_units.json")?,
            tasks: load_seed("tasks.json")?,
            contracts: load_seed("contracts.json")?,
        };
        info!(
            rates = seed.rates.len(),
            terminals = seed.terminals.len(),
            tasks = seed.tasks.len(),
            contracts = seed.contracts.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    pub fn apply_to(self, state: &mut AppState) {
        state.rates = self.rates;
        state.terminals = self.terminals;
        state.currencies = self.currencies;
        state.package_units = self.package_units;
        state.tasks = self.tasks;
        state.contracts = self.contracts;
    }
}

fn load_seed<T: DeserializeOwned>(file: &'static str) -> Result<Vec<T>, SeedError> {
    let bytes = assets::seed_file(file).ok_or(SeedError::Missing(file))?;
    parse_seed(file, &bytes)
}

fn parse_seed<T: DeserializeOwned>(file: &'static str, bytes: &[u8]) -> Result<Vec<T>, SeedError> {
    serde_json::from_slice(bytes).map_err(|source| {
        warn!(file, %source, "failed to decode seed file");
        SeedError::Malformed { file, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RateStatus, RegistryEntry};

    #[test]
    fn bundled_seed_decodes() {
        let seed = SeedData::load().unwrap();
        assert!(!seed.rates.is_empty());
        assert!(!seed.terminals.is_empty());
        assert!(!seed.currencies.is_empty());
        assert!(!seed.package_units.is_empty());
        assert!(!seed.tasks.is_empty());
        assert!(!seed.contracts.is_empty());
    }

    #[test]
    fn seed_rates_reference_known_codes() {
        let seed = SeedData::load().unwrap();
        for rate in &seed.rates {
            assert!(
                seed.currencies.iter().any(|c| c.code() == rate.currency),
                "unknown currency {}",
                rate.currency
            );
            assert!(
                seed.package_units.iter().any(|p| p.code() == rate.package_unit),
                "unknown package unit {}",
                rate.package_unit
            );
        }
        assert!(seed.rates.iter().any(|r| r.status == RateStatus::Active));
    }

    #[test]
    fn malformed_seed_names_the_file() {
        let err = parse_seed::<Task>("tasks.json", b"[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("seed file tasks.json is malformed"));
    }
}
