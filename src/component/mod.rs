//! Component records and inventory loading

mod data;
pub mod loader;

pub use data::Component;
pub use loader::{load_components, load_components_from_reader};
