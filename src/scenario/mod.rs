//! Scenario inputs and persistence

pub mod params;
pub mod store;

pub use params::{
    Abatement, AreaChange, LeaseType, ParkingConfig, ScenarioParams, DEFAULT_ESCALATION_PCT,
};
pub use store::{JsonFileStore, MemoryStore, ScenarioStore, StoreError};
