//! Saved-scenario persistence
//!
//! The engine itself never touches storage; callers hold a `ScenarioStore`
//! and pass loaded parameter records in. Two implementations are provided:
//! an in-memory map and a JSON file store that rewrites the whole file
//! atomically on every save (temp file + rename), so concurrent readers
//! never observe a partial update.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use super::params::ScenarioParams;

/// Errors from scenario persistence
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scenario store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value interface over saved scenarios
pub trait ScenarioStore {
    /// Fetch a saved scenario by name
    fn get(&self, name: &str) -> Option<ScenarioParams>;

    /// Save or replace a scenario under a name
    fn put(&mut self, name: &str, params: ScenarioParams) -> Result<(), StoreError>;

    /// Remove a scenario; returns whether it existed
    fn delete(&mut self, name: &str) -> Result<bool, StoreError>;

    /// Saved scenario names, sorted
    fn list(&self) -> Vec<String>;
}

/// Ephemeral in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    scenarios: HashMap<String, ScenarioParams>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for MemoryStore {
    fn get(&self, name: &str) -> Option<ScenarioParams> {
        self.scenarios.get(name).cloned()
    }

    fn put(&mut self, name: &str, params: ScenarioParams) -> Result<(), StoreError> {
        self.scenarios.insert(name.to_string(), params);
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        Ok(self.scenarios.remove(name).is_some())
    }

    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scenarios.keys().cloned().collect();
        names.sort();
        names
    }
}

/// JSON-on-disk store: one file holding the whole name -> params map.
/// Read fully at open, rewritten atomically on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    scenarios: HashMap<String, ScenarioParams>,
}

impl JsonFileStore {
    /// Open a store file, creating an empty store if the file is missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let scenarios = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, scenarios })
    }

    /// Number of saved scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.scenarios)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScenarioStore for JsonFileStore {
    fn get(&self, name: &str) -> Option<ScenarioParams> {
        self.scenarios.get(name).cloned()
    }

    fn put(&mut self, name: &str, params: ScenarioParams) -> Result<(), StoreError> {
        self.scenarios.insert(name.to_string(), params);
        self.persist()?;
        info!("saved scenario '{}' to {}", name, self.path.display());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        let existed = self.scenarios.remove(name).is_some();
        if existed {
            self.persist()?;
            info!("deleted scenario '{}' from {}", name, self.path.display());
        }
        Ok(existed)
    }

    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scenarios.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::params::{Abatement, AreaChange, LeaseType, ParkingConfig};

    fn sample_params() -> ScenarioParams {
        ScenarioParams {
            name: "HQ Relocation".to_string(),
            term_months: 66,
            area_sf: 12_500.0,
            base_rate: 48.5,
            rent_escalation_overrides: Some(vec![0.0, 2.5, 3.0]),
            lease_type: LeaseType::FullService,
            base_year_opex: Some(11.25),
            parking: ParkingConfig::Tiered {
                ratio_per_1000_sf: 4.0,
                reserved_spaces: 5,
                reserved_monthly_cost: 250.0,
                unreserved_monthly_cost: 125.0,
            },
            abatement: Abatement::Schedule(vec![3.0, 0.0, 1.0]),
            ti_allowance_sf: 50.0,
            moving_cost_sf: 10.0,
            discount_rate_pct: 7.0,
            area_change: Some(AreaChange {
                month: 25,
                delta_sf: 2_000.0,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_memory_store_crud() {
        let mut store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.put("a", sample_params()).unwrap();
        store.put("b", ScenarioParams::default()).unwrap();
        assert_eq!(store.list(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.get("a").unwrap(), sample_params());

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert_eq!(store.list(), vec!["b".to_string()]);
    }

    #[test]
    fn test_json_store_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert!(store.is_empty());
        store.put("saved", sample_params()).unwrap();

        // Reopen from disk and compare field-for-field
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get("saved").unwrap(), sample_params());
    }

    #[test]
    fn test_json_store_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("a", sample_params()).unwrap();
        store.put("b", ScenarioParams::default()).unwrap();
        assert!(store.delete("a").unwrap());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("a").is_none());
        assert!(reopened.get("b").is_some());
        assert_eq!(reopened.list(), vec!["b".to_string()]);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
