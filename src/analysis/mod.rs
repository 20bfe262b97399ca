//! Lease cash-flow projection and financial metrics

pub mod engine;
pub mod irr;
pub mod metrics;
pub mod rates;
pub mod rows;
pub mod schedule;
pub mod summary;

pub use engine::{AbatementBasis, AbatementPlacement, EngineConfig, LeaseEngine, CONFIG_VERSION};
pub use rows::{AnalysisResult, PeriodRow};
pub use schedule::{build_periods, SchedulePeriod};
pub use summary::{format_money, ScenarioSummary};
