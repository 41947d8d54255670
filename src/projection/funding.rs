//! Level contribution solver
//!
//! Finds the smallest level annual contribution that keeps every projected
//! year at or above the minimum balance.

use log::debug;

use super::engine::{ProjectionConfig, ProjectionEngine};
use super::ledger::ProjectionResult;
use crate::assumptions::Assumptions;
use crate::component::Component;
use crate::error::ReserveError;

/// Decimal places of the recommendation when the projection is unrounded
const DEFAULT_PLACES: u32 = 2;

/// Limit on bracket doublings before giving up on an upper bound
const MAX_DOUBLINGS: u32 = 64;

const MAX_ITERATIONS: u32 = 200;

/// Recommended contribution and the projection it produces
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRecommendation {
    /// Level annual contribution, rounded up to the projection's precision
    /// (cents for an unrounded projection)
    pub annual_contribution: f64,

    /// Projection run with the recommended contribution
    pub result: ProjectionResult,
}

/// Find the minimum level annual contribution that keeps the fund funded every year
///
/// Ending balances increase with the contribution in every year, so funded
/// status is monotonic and bisection converges. Returns a contribution of 0
/// when the fund is already funded without contributions.
pub fn recommend_contribution(
    components: &[Component],
    assumptions: &Assumptions,
    config: &ProjectionConfig,
) -> Result<FundingRecommendation, ReserveError> {
    let run = |contribution: f64| -> Result<ProjectionResult, ReserveError> {
        let trial = Assumptions {
            annual_contribution: contribution,
            ..assumptions.clone()
        };
        ProjectionEngine::new(trial, config.clone()).project(components)
    };

    let unfunded = run(0.0)?;
    if unfunded.is_fully_funded() {
        return Ok(FundingRecommendation {
            annual_contribution: 0.0,
            result: unfunded,
        });
    }

    // Recommendations are quoted at the precision the engine applies
    let places = config.precision.unwrap_or(DEFAULT_PLACES);
    let tolerance = 0.5 / 10f64.powi(places as i32);

    // Bracket: start from the total spend plus any opening shortfall and
    // double until every year is funded
    let shortfall = (assumptions.min_balance - assumptions.starting_balance).max(0.0);
    let mut low = 0.0_f64;
    let mut high = (unfunded.summary().total_replacement_spend + shortfall).max(1.0);
    let mut doublings = 0;
    while !run(high)?.is_fully_funded() {
        low = high;
        high *= 2.0;
        doublings += 1;
        if doublings >= MAX_DOUBLINGS {
            return Err(ReserveError::assumption(
                "annual_contribution",
                "no level contribution keeps the fund above the minimum balance",
            ));
        }
    }

    for _ in 0..MAX_ITERATIONS {
        if high - low < tolerance {
            break;
        }
        let mid = (low + high) / 2.0;
        if mid <= low || mid >= high {
            break;
        }
        if run(mid)?.is_fully_funded() {
            high = mid;
        } else {
            low = mid;
        }
    }

    // Rounding up keeps the recommendation on the funded side
    let mut result = run(ceil_to(high, places))?;
    if !result.is_fully_funded() {
        // Scaling can land one float step below `high` for very large amounts
        result = run(high)?;
    }
    let annual_contribution = result.rows.first().map(|r| r.contribution).unwrap_or(high);
    debug!(
        "recommended contribution {:.2} after bracketing to [{:.2}, {:.2}]",
        annual_contribution, low, high
    );

    Ok(FundingRecommendation {
        annual_contribution,
        result,
    })
}

fn ceil_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).ceil() / scale
}
