//! Reserve Study - capital reserve projection engine for property components
//!
//! This library provides:
//! - Year-by-year reserve fund projections (inflation, interest, replacements)
//! - Component life-cycle tracking with automatic replacement resets
//! - Funded status and fully funded balance per year
//! - Level contribution recommendations
//! - Multi-scenario projections and CSV ledger export

pub mod error;
pub mod component;
pub mod assumptions;
pub mod projection;
pub mod scenario;
pub mod study;
pub mod export;

// Re-export commonly used types
pub use error::{DataError, ReserveError};
pub use component::Component;
pub use assumptions::Assumptions;
pub use projection::{project, LedgerRow, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
pub use study::ReserveStudy;
