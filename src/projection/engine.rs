//! Core projection engine for yearly reserve fund cash flows

use log::debug;

use super::ledger::{LedgerRow, ProjectionResult};
use super::state::ProjectionState;
use crate::assumptions::Assumptions;
use crate::component::Component;
use crate::error::ReserveError;

/// Configuration for a projection run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionConfig {
    /// Calendar year of projection year 1; labels rows when set
    pub start_year: Option<i32>,

    /// Decimal places to round monetary amounts to as they are computed
    /// (None = full floating point precision)
    pub precision: Option<u32>,
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for a set of components
    ///
    /// All inputs are validated before the first year is computed. The
    /// components are copied into working state, so the slice is left as-is.
    pub fn project(&self, components: &[Component]) -> Result<ProjectionResult, ReserveError> {
        self.assumptions.validate()?;
        for component in components {
            component.validate()?;
        }

        let years = self.assumptions.projection_years;
        let mut result = ProjectionResult::with_capacity(years as usize);
        let mut state = ProjectionState::new(components, self.round(self.assumptions.starting_balance));

        for _year in 1..=years {
            state.advance_year();

            let row = self.calculate_year(&mut state);
            result.add_row(row);
        }

        debug!(
            "projected {} components over {} years, final balance {:.2}",
            components.len(),
            years,
            state.balance,
        );

        Ok(result)
    }

    /// Calculate the ledger row for the state's current year
    fn calculate_year(&self, state: &mut ProjectionState) -> LedgerRow {
        let year = state.year;
        let mut row = LedgerRow::new(year);
        row.calendar_year = self.config.start_year.map(|start| start.saturating_add(year as i32 - 1));

        row.beginning_balance = state.balance;

        // A component replaced this year starts aging immediately, so it
        // comes due again `useful_life_years` later
        let mut spend = 0.0;
        for component in state.components.iter_mut() {
            if component.is_due() {
                let cost = component.inflated_cost(self.assumptions.inflation_rate, year);
                debug!("year {}: replacing '{}' for {:.2}", year, component.name, cost);

                spend += cost;
                row.replacements.push(component.name.clone());
                component.replace();
            }
            component.age_one_year();
        }
        row.replacement_spend = self.round(spend);

        // Interest on the balance carried in only; contributions and spend
        // this year do not earn or cost interest
        row.contribution = self.round(self.assumptions.annual_contribution);
        row.interest_earned = self.round(row.beginning_balance * self.assumptions.interest_rate);

        row.ending_balance = self.round(
            row.beginning_balance + row.contribution + row.interest_earned - row.replacement_spend,
        );
        row.funded_status = row.ending_balance >= self.assumptions.min_balance;

        self.calculate_funding_level(state, &mut row);

        state.balance = row.ending_balance;

        row
    }

    /// Fully funded balance: the consumed share of each component's cost in this year's dollars
    fn calculate_funding_level(&self, state: &ProjectionState, row: &mut LedgerRow) {
        let inflation_rate = self.assumptions.inflation_rate;
        let fully_funded: f64 = state
            .components
            .iter()
            .map(|c| c.inflated_cost(inflation_rate, row.year) * c.consumed_fraction())
            .sum();

        row.fully_funded_balance = self.round(fully_funded);
        row.percent_funded = if row.fully_funded_balance > 0.0 {
            Some(row.ending_balance / row.fully_funded_balance)
        } else {
            None
        };
    }

    fn round(&self, value: f64) -> f64 {
        match self.config.precision {
            Some(places) => round_to(value, places),
            None => value,
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Project a ledger with default configuration
///
/// Convenience wrapper around [`ProjectionEngine::project`] returning only the rows.
pub fn project(components: &[Component], assumptions: &Assumptions) -> Result<Vec<LedgerRow>, ReserveError> {
    let engine = ProjectionEngine::new(assumptions.clone(), ProjectionConfig::default());
    Ok(engine.project(components)?.rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_assumptions() -> Assumptions {
        Assumptions {
            projection_years: 10,
            inflation_rate: 0.10,
            interest_rate: 0.0,
            annual_contribution: 0.0,
            starting_balance: 0.0,
            min_balance: 0.0,
        }
    }

    #[test]
    fn test_projection_runs() {
        let components = vec![Component::new("Roof", 1000.0, 5, 0)];
        let rows = project(&components, &test_assumptions()).unwrap();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[9].year, 10);
    }

    #[test]
    fn test_replacement_cycle() {
        let components = vec![Component::new("Roof", 1000.0, 5, 0)];
        let rows = project(&components, &test_assumptions()).unwrap();

        let replacement_years: Vec<u32> = rows
            .iter()
            .filter(|r| r.replacement_spend > 0.0)
            .map(|r| r.year)
            .collect();
        assert_eq!(replacement_years, vec![1, 6]);

        assert_relative_eq!(rows[0].replacement_spend, 1000.0);
        assert_relative_eq!(rows[5].replacement_spend, 1610.51, epsilon = 1e-9);
        assert_eq!(rows[5].replacements, vec!["Roof".to_string()]);
    }

    #[test]
    fn test_same_year_replacements_sum() {
        let components = vec![
            Component::new("Roof", 1000.0, 20, 2),
            Component::new("Paint", 300.0, 8, 2),
        ];
        let assumptions = Assumptions {
            inflation_rate: 0.0,
            ..test_assumptions()
        };
        let rows = project(&components, &assumptions).unwrap();

        assert_eq!(rows[2].replacement_spend, 1300.0);
        assert_eq!(rows[2].replacements, vec!["Roof".to_string(), "Paint".to_string()]);
        assert_eq!(rows[0].replacement_spend, 0.0);
        assert_eq!(rows[1].replacement_spend, 0.0);
    }

    #[test]
    fn test_negative_balance_is_not_error() {
        let components = vec![Component::new("Roof", 1000.0, 5, 0)];
        let assumptions = Assumptions {
            starting_balance: 200.0,
            ..test_assumptions()
        };
        let rows = project(&components, &assumptions).unwrap();

        assert_relative_eq!(rows[0].ending_balance, -800.0);
        assert!(!rows[0].funded_status);
    }

    #[test]
    fn test_min_balance_threshold() {
        let assumptions = Assumptions {
            projection_years: 2,
            starting_balance: 1000.0,
            min_balance: 1500.0,
            annual_contribution: 400.0,
            interest_rate: 0.0,
            inflation_rate: 0.0,
        };
        let rows = project(&[], &assumptions).unwrap();

        assert!(!rows[0].funded_status); // 1400
        assert!(rows[1].funded_status); // 1800
    }

    #[test]
    fn test_interest_on_beginning_balance_only() {
        let components = vec![Component::new("Boiler", 5000.0, 10, 0)];
        let assumptions = Assumptions {
            projection_years: 1,
            inflation_rate: 0.0,
            interest_rate: 0.05,
            annual_contribution: 2000.0,
            starting_balance: 10000.0,
            min_balance: 0.0,
        };
        let rows = project(&components, &assumptions).unwrap();

        assert_relative_eq!(rows[0].interest_earned, 500.0);
        assert_relative_eq!(rows[0].ending_balance, 10000.0 + 2000.0 + 500.0 - 5000.0);
    }

    #[test]
    fn test_calendar_year_labels() {
        let engine = ProjectionEngine::new(
            test_assumptions(),
            ProjectionConfig {
                start_year: Some(2026),
                precision: None,
            },
        );
        let result = engine.project(&[]).unwrap();

        assert_eq!(result.rows[0].calendar_year, Some(2026));
        assert_eq!(result.rows[9].calendar_year, Some(2035));
    }

    #[test]
    fn test_calendar_year_saturates() {
        let engine = ProjectionEngine::new(
            test_assumptions(),
            ProjectionConfig {
                start_year: Some(i32::MAX - 1),
                precision: None,
            },
        );
        let result = engine.project(&[]).unwrap();

        assert_eq!(result.rows[1].calendar_year, Some(i32::MAX));
        assert_eq!(result.rows[9].calendar_year, Some(i32::MAX));
    }

    #[test]
    fn test_oversized_horizon_rejected_before_allocation() {
        let assumptions = Assumptions {
            projection_years: u32::MAX,
            ..test_assumptions()
        };
        let result = project(&[], &assumptions);
        assert!(matches!(
            result,
            Err(ReserveError::InvalidAssumption { field: "projection_years", .. })
        ));
    }

    #[test]
    fn test_precision_keeps_chaining_exact() {
        let engine = ProjectionEngine::new(
            Assumptions {
                projection_years: 12,
                inflation_rate: 0.037,
                interest_rate: 0.0123,
                annual_contribution: 1234.567,
                starting_balance: 9876.54321,
                min_balance: 0.0,
            },
            ProjectionConfig {
                start_year: None,
                precision: Some(2),
            },
        );
        let components = vec![Component::new("Elevator", 3333.33, 4, 1)];
        let rows = engine.project(&components).unwrap().rows;

        assert_eq!(rows[0].beginning_balance, 9876.54);
        assert_eq!(rows[0].contribution, 1234.57);
        for pair in rows.windows(2) {
            assert_eq!(pair[1].beginning_balance, pair[0].ending_balance);
        }
        for row in &rows {
            assert_eq!(row.ending_balance, round_to(row.ending_balance, 2));
            assert_eq!(row.interest_earned, round_to(row.interest_earned, 2));
        }
    }

    #[test]
    fn test_fully_funded_balance() {
        let components = vec![Component::new("Roof", 1000.0, 4, 2)];
        let assumptions = Assumptions {
            projection_years: 3,
            inflation_rate: 0.0,
            starting_balance: 600.0,
            ..test_assumptions()
        };
        let rows = project(&components, &assumptions).unwrap();

        // End of year 1: remaining 1 of 4 -> 3/4 consumed
        assert_relative_eq!(rows[0].fully_funded_balance, 750.0);
        assert_relative_eq!(rows[0].percent_funded.unwrap(), 0.8);
        // End of year 2: remaining 0 -> fully consumed
        assert_relative_eq!(rows[1].fully_funded_balance, 1000.0);
        // Year 3: replaced, one year into the new life cycle
        assert_relative_eq!(rows[2].fully_funded_balance, 250.0);
        assert_relative_eq!(rows[2].percent_funded.unwrap(), -1.6);
    }

    #[test]
    fn test_no_funding_level_without_components() {
        let rows = project(&[], &test_assumptions()).unwrap();
        assert!(rows.iter().all(|r| r.fully_funded_balance == 0.0 && r.percent_funded.is_none()));
    }

    #[test]
    fn test_validation_happens_first() {
        let components = vec![
            Component::new("Roof", 1000.0, 5, 0),
            Component::new("Broken", 1000.0, 0, 0),
        ];
        let result = project(&components, &test_assumptions());
        assert!(matches!(result, Err(ReserveError::InvalidComponent { .. })));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.005_f64 + 1e-9, 2), 1.01);
        assert_eq!(round_to(1610.5099999, 2), 1610.51);
        assert_eq!(round_to(-2.345_678, 3), -2.346);
    }
}
