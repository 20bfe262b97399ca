//! Lease Engine - cash-flow projection and financial metrics for commercial
//! lease and property purchase scenarios
//!
//! This library provides:
//! - Annual period scheduling with partial-final-period proration
//! - Rent/OPEX/parking rate projection with escalation and overrides
//! - Signed net cash-flow schedules per scenario
//! - Summary metrics: total cost, NPV, IRR, payback, average effective rent
//! - Purchase analysis (mortgage amortization, ROI, cap rate)
//! - A saved-scenario store and a parallel batch runner for comparisons

pub mod analysis;
pub mod purchase;
pub mod runner;
pub mod scenario;

// Re-export commonly used types
pub use analysis::{AnalysisResult, EngineConfig, LeaseEngine, PeriodRow, ScenarioSummary};
pub use purchase::{analyze_purchase, PurchaseParams, PurchaseResult};
pub use runner::ScenarioRunner;
pub use scenario::{JsonFileStore, MemoryStore, ScenarioParams, ScenarioStore};
