//! Batch scenario runner for comparison mode
//!
//! Scenario runs are pure functions with no shared state, so a batch of
//! scenarios maps in parallel with no coordination.

use rayon::prelude::*;

use crate::analysis::{AnalysisResult, EngineConfig, LeaseEngine};
use crate::scenario::ScenarioParams;

/// Runs one or many scenarios under a fixed engine configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: EngineConfig,
}

impl ScenarioRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a single scenario
    pub fn run(&self, params: &ScenarioParams) -> AnalysisResult {
        LeaseEngine::new(self.config.clone()).analyze(params)
    }

    /// Run a batch of scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[ScenarioParams]) -> Vec<AnalysisResult> {
        scenarios
            .par_iter()
            .map(|params| LeaseEngine::new(self.config.clone()).analyze(params))
            .collect()
    }
}
