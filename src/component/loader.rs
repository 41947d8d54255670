//! Load component inventories from CSV

use super::Component;
use crate::error::DataError;
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::path::Path;

/// Raw CSV row; accepts the study form's `current_replacement_cost` column name
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    #[serde(alias = "current_replacement_cost")]
    replacement_cost: f64,
    useful_life_years: u32,
    remaining_life_years: u32,
}

impl CsvRow {
    fn into_component(self) -> Option<Component> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Component::new(
            name,
            self.replacement_cost,
            self.useful_life_years,
            self.remaining_life_years,
        ))
    }
}

/// Load all components from a CSV file
pub fn load_components<P: AsRef<Path>>(path: P) -> Result<Vec<Component>, DataError> {
    let file = std::fs::File::open(path.as_ref())?;
    let components = load_components_from_reader(file)?;
    debug!("loaded {} components from {}", components.len(), path.as_ref().display());
    Ok(components)
}

/// Load components from any reader (e.g., string buffer, uploaded file)
///
/// Rows with a blank name are skipped. Values are not validated here;
/// the projection engine rejects invalid components before running.
pub fn load_components_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Component>, DataError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut components = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        if let Some(component) = row.into_component() {
            components.push(component);
        }
    }

    Ok(components)
}
