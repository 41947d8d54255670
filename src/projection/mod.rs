//! Projection engine for yearly reserve fund ledgers

mod state;
mod engine;
mod ledger;
mod funding;


pub use state::{ComponentState, ProjectionState};
pub use engine::{project, round_to, ProjectionConfig, ProjectionEngine};
pub use ledger::{LedgerRow, ProjectionResult, ProjectionSummary};
pub use funding::{recommend_contribution, FundingRecommendation};
