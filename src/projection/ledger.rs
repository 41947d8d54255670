//! Ledger output structures for projections

use serde::{Deserialize, Serialize};

/// A single year of projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    // Timing
    pub year: u32,
    pub calendar_year: Option<i32>,

    // Fund roll-forward
    pub beginning_balance: f64,
    pub contribution: f64,
    pub interest_earned: f64,
    pub replacement_spend: f64,
    pub ending_balance: f64,

    /// Ending balance is at or above the minimum balance
    pub funded_status: bool,

    /// Components replaced this year, in input order
    pub replacements: Vec<String>,

    // Funding level
    pub fully_funded_balance: f64,
    pub percent_funded: Option<f64>,
}

impl LedgerRow {
    /// Create a new ledger row with zeroed amounts
    pub fn new(year: u32) -> Self {
        Self {
            year,
            calendar_year: None,
            beginning_balance: 0.0,
            contribution: 0.0,
            interest_earned: 0.0,
            replacement_spend: 0.0,
            ending_balance: 0.0,
            funded_status: true,
            replacements: Vec::new(),
            fully_funded_balance: 0.0,
            percent_funded: None,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly ledger rows, ordered by year
    pub rows: Vec<LedgerRow>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self { rows: Vec::with_capacity(years) }
    }

    /// Add a ledger row
    pub fn add_row(&mut self, row: LedgerRow) {
        self.rows.push(row);
    }

    /// Every year ends at or above the minimum balance
    pub fn is_fully_funded(&self) -> bool {
        self.rows.iter().all(|r| r.funded_status)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributions: f64 = self.rows.iter().map(|r| r.contribution).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest_earned).sum();
        let total_replacement_spend: f64 = self.rows.iter().map(|r| r.replacement_spend).sum();
        let replacement_events = self.rows.iter().map(|r| r.replacements.len()).sum();

        let final_balance = self.rows.last().map(|r| r.ending_balance).unwrap_or(0.0);

        let lowest = self
            .rows
            .iter()
            .min_by(|a, b| a.ending_balance.total_cmp(&b.ending_balance));

        let first_underfunded_year = self.rows.iter().find(|r| !r.funded_status).map(|r| r.year);
        let underfunded_years = self.rows.iter().filter(|r| !r.funded_status).count() as u32;

        ProjectionSummary {
            total_years: self.rows.len() as u32,
            total_contributions,
            total_interest,
            total_replacement_spend,
            replacement_events,
            final_balance,
            lowest_balance: lowest.map(|r| r.ending_balance).unwrap_or(0.0),
            lowest_balance_year: lowest.map(|r| r.year),
            first_underfunded_year,
            underfunded_years,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub total_replacement_spend: f64,
    pub replacement_events: usize,
    pub final_balance: f64,
    pub lowest_balance: f64,
    /// First year reaching the lowest ending balance
    pub lowest_balance_year: Option<u32>,
    pub first_underfunded_year: Option<u32>,
    pub underfunded_years: u32,
}
