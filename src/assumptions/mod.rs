//! Financial assumptions for a reserve projection run

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DataError, ReserveError};

/// Longest horizon a single run accepts
pub const MAX_PROJECTION_YEARS: u32 = 1000;

/// Financial parameters for one projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Number of years to project (1..=MAX_PROJECTION_YEARS)
    pub projection_years: u32,

    /// Annual inflation applied to replacement costs
    pub inflation_rate: f64,

    /// Annual interest earned on the beginning-of-year balance
    pub interest_rate: f64,

    /// Level contribution added every year
    pub annual_contribution: f64,

    /// Fund balance at year 0
    pub starting_balance: f64,

    /// Ending balance below this threshold marks the year as under-funded
    pub min_balance: f64,
}

impl Assumptions {
    /// Defaults used by a new study form
    pub fn default_study() -> Self {
        Self {
            projection_years: 30,
            inflation_rate: 0.03,
            interest_rate: 0.01,
            annual_contribution: 25_000.0,
            starting_balance: 50_000.0,
            min_balance: 0.0,
        }
    }

    /// Load assumptions from a JSON file; missing fields take study defaults
    pub fn from_json_path(path: &Path) -> Result<Self, DataError> {
        loader::load_assumptions(path)
    }

    /// Parse assumptions from a JSON string; missing fields take study defaults
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        loader::parse_assumptions(json)
    }

    /// Check that the run can proceed
    ///
    /// Rates may be zero but never negative. Monetary amounts may be negative
    /// (a fund can start in deficit) but must be finite.
    pub fn validate(&self) -> Result<(), ReserveError> {
        if self.projection_years < 1 {
            return Err(ReserveError::assumption(
                "projection_years",
                "projection must cover at least one year",
            ));
        }
        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(ReserveError::assumption(
                "projection_years",
                format!("horizon of {} years exceeds {}", self.projection_years, MAX_PROJECTION_YEARS),
            ));
        }
        check_rate("inflation_rate", self.inflation_rate)?;
        check_rate("interest_rate", self.interest_rate)?;
        check_amount("annual_contribution", self.annual_contribution)?;
        check_amount("starting_balance", self.starting_balance)?;
        check_amount("min_balance", self.min_balance)?;
        Ok(())
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_study()
    }
}

fn check_rate(field: &'static str, rate: f64) -> Result<(), ReserveError> {
    if !rate.is_finite() {
        return Err(ReserveError::assumption(field, format!("rate must be finite, got {}", rate)));
    }
    if rate < 0.0 {
        return Err(ReserveError::assumption(field, format!("rate must not be negative, got {}", rate)));
    }
    Ok(())
}

fn check_amount(field: &'static str, amount: f64) -> Result<(), ReserveError> {
    if !amount.is_finite() {
        return Err(ReserveError::assumption(field, format!("amount must be finite, got {}", amount)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_study_is_valid() {
        let assumptions = Assumptions::default_study();
        assert_eq!(assumptions.projection_years, 30);
        assert!(assumptions.validate().is_ok());
    }

    #[test]
    fn test_zero_rates_allowed() {
        let assumptions = Assumptions {
            inflation_rate: 0.0,
            interest_rate: 0.0,
            ..Assumptions::default_study()
        };
        assert!(assumptions.validate().is_ok());
    }

    #[test]
    fn test_negative_rates_rejected() {
        let negative_inflation = Assumptions {
            inflation_rate: -0.01,
            ..Assumptions::default_study()
        };
        assert!(matches!(
            negative_inflation.validate(),
            Err(ReserveError::InvalidAssumption { field: "inflation_rate", .. })
        ));

        let negative_interest = Assumptions {
            interest_rate: -0.02,
            ..Assumptions::default_study()
        };
        assert!(matches!(
            negative_interest.validate(),
            Err(ReserveError::InvalidAssumption { field: "interest_rate", .. })
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let assumptions = Assumptions {
            projection_years: 0,
            ..Assumptions::default_study()
        };
        assert!(matches!(
            assumptions.validate(),
            Err(ReserveError::InvalidAssumption { field: "projection_years", .. })
        ));
    }

    #[test]
    fn test_horizon_cap() {
        let at_cap = Assumptions {
            projection_years: MAX_PROJECTION_YEARS,
            ..Assumptions::default_study()
        };
        assert!(at_cap.validate().is_ok());

        let past_cap = Assumptions {
            projection_years: MAX_PROJECTION_YEARS + 1,
            ..Assumptions::default_study()
        };
        assert!(matches!(
            past_cap.validate(),
            Err(ReserveError::InvalidAssumption { field: "projection_years", .. })
        ));

        let unbounded = Assumptions {
            projection_years: u32::MAX,
            ..Assumptions::default_study()
        };
        assert!(unbounded.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let assumptions = Assumptions {
            starting_balance: f64::INFINITY,
            ..Assumptions::default_study()
        };
        assert!(assumptions.validate().is_err());

        let assumptions = Assumptions {
            interest_rate: f64::NAN,
            ..Assumptions::default_study()
        };
        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_negative_starting_balance_allowed() {
        let assumptions = Assumptions {
            starting_balance: -5_000.0,
            ..Assumptions::default_study()
        };
        assert!(assumptions.validate().is_ok());
    }
}
