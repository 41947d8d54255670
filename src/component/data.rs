//! Physical components tracked by a reserve study

use serde::{Deserialize, Serialize};

use crate::error::ReserveError;

/// A single physical asset that is replaced on a fixed life cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Identifying label (e.g. "Roof")
    pub name: String,

    /// Replacement cost in present-year dollars
    pub replacement_cost: f64,

    /// Years until the next scheduled replacement (0 = due in year 1)
    pub remaining_life_years: u32,

    /// Life span assigned after each replacement
    pub useful_life_years: u32,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        replacement_cost: f64,
        useful_life_years: u32,
        remaining_life_years: u32,
    ) -> Self {
        Self {
            name: name.into(),
            replacement_cost,
            remaining_life_years,
            useful_life_years,
        }
    }

    /// Check the component invariants the engine relies on
    pub fn validate(&self) -> Result<(), ReserveError> {
        if !self.replacement_cost.is_finite() || self.replacement_cost <= 0.0 {
            return Err(ReserveError::component(
                &self.name,
                format!("replacement cost must be positive, got {}", self.replacement_cost),
            ));
        }
        if self.useful_life_years < 1 {
            return Err(ReserveError::component(&self.name, "useful life must be at least 1 year"));
        }
        if self.remaining_life_years > self.useful_life_years {
            return Err(ReserveError::component(
                &self.name,
                format!(
                    "remaining life {} exceeds useful life {}",
                    self.remaining_life_years, self.useful_life_years
                ),
            ));
        }
        Ok(())
    }
}
