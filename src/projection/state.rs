//! Working state carried from one projection year to the next

use crate::component::Component;

/// Engine-owned copy of a component's life cycle
///
/// The caller's `Component` records are never touched; the engine clones
/// them into these working states before the first year.
#[derive(Debug, Clone)]
pub struct ComponentState {
    pub name: String,
    pub replacement_cost: f64,
    pub useful_life_years: u32,
    pub remaining_life_years: u32,
}

impl ComponentState {
    pub fn from_component(component: &Component) -> Self {
        Self {
            name: component.name.clone(),
            replacement_cost: component.replacement_cost,
            useful_life_years: component.useful_life_years,
            remaining_life_years: component.remaining_life_years,
        }
    }

    /// Due for replacement this year
    pub fn is_due(&self) -> bool {
        self.remaining_life_years == 0
    }

    /// Replace the component: a new life cycle starts
    pub fn replace(&mut self) {
        self.remaining_life_years = self.useful_life_years;
    }

    /// One more year of wear
    pub fn age_one_year(&mut self) {
        self.remaining_life_years = self.remaining_life_years.saturating_sub(1);
    }

    /// Replacement cost inflated to projection year `year` (1-indexed)
    ///
    /// Year 1 is priced in present-year dollars.
    pub fn inflated_cost(&self, inflation_rate: f64, year: u32) -> f64 {
        self.replacement_cost * (1.0 + inflation_rate).powi(year as i32 - 1)
    }

    /// Share of the useful life already consumed
    pub fn consumed_fraction(&self) -> f64 {
        let used = self.useful_life_years.saturating_sub(self.remaining_life_years);
        used as f64 / self.useful_life_years as f64
    }
}

/// State of the reserve fund at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed, 0 before the first year)
    pub year: u32,

    /// Fund balance carried into the current year
    pub balance: f64,

    /// Working copies of every component
    pub components: Vec<ComponentState>,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn new(components: &[Component], starting_balance: f64) -> Self {
        Self {
            year: 0,
            balance: starting_balance,
            components: components.iter().map(ComponentState::from_component).collect(),
        }
    }

    /// Advance to next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }
}
