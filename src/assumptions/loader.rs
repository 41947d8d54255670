//! JSON-based assumption loader

use super::Assumptions;
use crate::error::DataError;
use log::debug;
use std::fs;
use std::path::Path;

/// Default assumptions file looked up by the CLI
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions.json";

/// Load assumptions from a JSON file
pub fn load_assumptions(path: &Path) -> Result<Assumptions, DataError> {
    let json = fs::read_to_string(path)?;
    let assumptions = parse_assumptions(&json)?;
    debug!("loaded assumptions from {}: {:?}", path.display(), assumptions);
    Ok(assumptions)
}

/// Parse assumptions from JSON text; absent fields keep study defaults
pub fn parse_assumptions(json: &str) -> Result<Assumptions, DataError> {
    Ok(serde_json::from_str(json)?)
}
