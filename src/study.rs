//! Reserve study: the inputs for one property plus how to run them

use chrono::{Datelike, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::component::Component;
use crate::error::ReserveError;
use crate::projection::{
    recommend_contribution, FundingRecommendation, ProjectionConfig, ProjectionEngine, ProjectionResult,
};

/// Inputs of one reserve study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveStudy {
    pub property_name: String,

    /// Calendar year of projection year 1
    pub start_year: i32,

    pub assumptions: Assumptions,
    pub components: Vec<Component>,

    /// Decimal places for monetary amounts (None = unrounded)
    #[serde(default)]
    pub precision: Option<u32>,
}

impl ReserveStudy {
    pub fn new(
        property_name: impl Into<String>,
        start_year: i32,
        assumptions: Assumptions,
        components: Vec<Component>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            start_year,
            assumptions,
            components,
            precision: None,
        }
    }

    /// A new study pre-filled with default assumptions and sample components,
    /// starting in the current year
    pub fn template(property_name: impl Into<String>) -> Self {
        Self::new(
            property_name,
            current_year(),
            Assumptions::default_study(),
            sample_components(),
        )
    }

    /// Copy this study's inputs into a new study for another run
    ///
    /// Assumptions and components are deep-copied; results are never carried over.
    pub fn clone_inputs(&self, property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            ..self.clone()
        }
    }

    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            start_year: Some(self.start_year),
            precision: self.precision,
        }
    }

    /// Run the projection for this study
    pub fn run(&self) -> Result<ProjectionResult, ReserveError> {
        let engine = ProjectionEngine::new(self.assumptions.clone(), self.projection_config());
        let result = engine.project(&self.components)?;

        let summary = result.summary();
        info!(
            "study '{}': {} years, final balance {:.2}, lowest {:.2}",
            self.property_name, summary.total_years, summary.final_balance, summary.lowest_balance
        );
        if let Some(year) = summary.first_underfunded_year {
            warn!(
                "study '{}' falls below minimum balance in year {} ({} under-funded years)",
                self.property_name,
                self.start_year + year as i32 - 1,
                summary.underfunded_years
            );
        }

        Ok(result)
    }

    /// Minimum level contribution keeping every year funded
    pub fn recommend_contribution(&self) -> Result<FundingRecommendation, ReserveError> {
        recommend_contribution(&self.components, &self.assumptions, &self.projection_config())
    }
}

/// Current UTC calendar year
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Typical starter inventory for a new study
pub fn sample_components() -> Vec<Component> {
    vec![
        Component::new("Roof", 180_000.0, 25, 8),
        Component::new("Exterior Paint", 45_000.0, 10, 3),
        Component::new("Paving", 90_000.0, 20, 12),
    ]
}
