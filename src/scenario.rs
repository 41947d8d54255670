//! Scenario runner for batch projections
//!
//! Holds one component inventory and projects it under many assumption
//! sets, e.g. a sweep of contribution levels or inflation rates.

use log::info;
use rayon::prelude::*;

use crate::assumptions::Assumptions;
use crate::component::Component;
use crate::error::ReserveError;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-loaded scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(components);
///
/// let scenarios: Vec<_> = [15_000.0, 20_000.0, 25_000.0]
///     .iter()
///     .map(|&c| Assumptions { annual_contribution: c, ..base.clone() })
///     .collect();
/// let results = runner.run_scenarios(&scenarios);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    components: Vec<Component>,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with default projection config
    pub fn new(components: Vec<Component>) -> Self {
        Self::with_config(components, ProjectionConfig::default())
    }

    pub fn with_config(components: Vec<Component>, config: ProjectionConfig) -> Self {
        Self { components, config }
    }

    /// Run a single projection with the given assumptions
    pub fn run(&self, assumptions: &Assumptions) -> Result<ProjectionResult, ReserveError> {
        let engine = ProjectionEngine::new(assumptions.clone(), self.config.clone());
        engine.project(&self.components)
    }

    /// Run every assumption set in parallel
    ///
    /// Results come back in the order of `scenarios`; each entry fails or
    /// succeeds independently.
    pub fn run_scenarios(&self, scenarios: &[Assumptions]) -> Vec<Result<ProjectionResult, ReserveError>> {
        info!(
            "running {} scenarios over {} components",
            scenarios.len(),
            self.components.len()
        );
        scenarios.par_iter().map(|assumptions| self.run(assumptions)).collect()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}
