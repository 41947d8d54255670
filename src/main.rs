//! Reserve Study CLI
//!
//! Command-line interface for running reserve fund projections

use anyhow::{Context, Result};
use clap::Parser;
use reserve_study::{
    assumptions::loader::DEFAULT_ASSUMPTIONS_PATH,
    component::load_components,
    export::{export_file_name, write_ledger_csv},
    study::{current_year, sample_components},
    Assumptions, ReserveStudy,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "reserve_study", about = "Project a property's capital reserve fund year by year")]
struct Cli {
    /// Components CSV (name,replacement_cost,useful_life_years,remaining_life_years).
    /// Uses a sample inventory when omitted.
    #[arg(long)]
    components: Option<PathBuf>,

    /// Assumptions JSON; missing fields take study defaults.
    /// Falls back to data/assumptions.json when present.
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Annual inflation rate for replacement costs (e.g. 0.03)
    #[arg(long)]
    inflation: Option<f64>,

    /// Annual interest rate on the fund balance (e.g. 0.01)
    #[arg(long)]
    interest: Option<f64>,

    /// Level annual contribution
    #[arg(long)]
    contribution: Option<f64>,

    /// Fund balance at the start of the projection
    #[arg(long, allow_hyphen_values = true)]
    starting_balance: Option<f64>,

    /// Minimum balance for a year to count as funded
    #[arg(long, allow_hyphen_values = true)]
    min_balance: Option<f64>,

    /// Calendar year of projection year 1 (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Round monetary amounts to this many decimal places
    #[arg(long)]
    precision: Option<u32>,

    /// Property name used in the export header and file name
    #[arg(long, default_value = "Property")]
    property: String,

    /// Ledger CSV output path (defaults to reserve_study_<property>.csv)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write the full projection result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Solve for the minimum level contribution and project with it
    #[arg(long, default_value_t = false)]
    recommend: bool,
}

impl Cli {
    fn load_assumptions(&self) -> Result<Assumptions> {
        let mut assumptions = match &self.assumptions {
            Some(path) => Assumptions::from_json_path(path)
                .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
            None if Path::new(DEFAULT_ASSUMPTIONS_PATH).exists() => {
                Assumptions::from_json_path(Path::new(DEFAULT_ASSUMPTIONS_PATH))
                    .with_context(|| format!("failed to load {}", DEFAULT_ASSUMPTIONS_PATH))?
            }
            None => Assumptions::default_study(),
        };

        if let Some(years) = self.years {
            assumptions.projection_years = years;
        }
        if let Some(rate) = self.inflation {
            assumptions.inflation_rate = rate;
        }
        if let Some(rate) = self.interest {
            assumptions.interest_rate = rate;
        }
        if let Some(amount) = self.contribution {
            assumptions.annual_contribution = amount;
        }
        if let Some(amount) = self.starting_balance {
            assumptions.starting_balance = amount;
        }
        if let Some(amount) = self.min_balance {
            assumptions.min_balance = amount;
        }

        Ok(assumptions)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let components = match &cli.components {
        Some(path) => load_components(path)
            .with_context(|| format!("failed to load components from {}", path.display()))?,
        None => sample_components(),
    };
    let assumptions = cli.load_assumptions()?;

    let mut study = ReserveStudy::new(
        cli.property.clone(),
        cli.start_year.unwrap_or_else(current_year),
        assumptions,
        components,
    );
    study.precision = cli.precision;

    println!("Reserve Study v0.1.0");
    println!("====================\n");
    println!("Property: {}", study.property_name);
    println!("  Components: {}", study.components.len());
    println!("  Horizon: {} years from {}", study.assumptions.projection_years, study.start_year);
    println!("  Inflation: {:.2}%", study.assumptions.inflation_rate * 100.0);
    println!("  Interest: {:.2}%", study.assumptions.interest_rate * 100.0);
    println!("  Starting balance: ${:.2}", study.assumptions.starting_balance);

    let result = if cli.recommend {
        let recommendation = study.recommend_contribution().context("funding solver failed")?;
        println!("  Recommended contribution: ${:.2}", recommendation.annual_contribution);
        study.assumptions.annual_contribution = recommendation.annual_contribution;
        recommendation.result
    } else {
        println!("  Annual contribution: ${:.2}", study.assumptions.annual_contribution);
        study.run().context("projection failed")?
    };
    println!();

    println!("{:>4} {:>6} {:>14} {:>12} {:>11} {:>14} {:>14} {:>7}",
        "Year", "Cal", "Beginning", "Contrib", "Interest", "Replacements", "Ending", "Funded");
    println!("{}", "-".repeat(90));
    for row in &result.rows {
        println!("{:>4} {:>6} {:>14.2} {:>12.2} {:>11.2} {:>14.2} {:>14.2} {:>7}",
            row.year,
            row.calendar_year.map(|y| y.to_string()).unwrap_or_default(),
            row.beginning_balance,
            row.contribution,
            row.interest_earned,
            row.replacement_spend,
            row.ending_balance,
            if row.funded_status { "yes" } else { "NO" },
        );
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(&study.property_name)));
    let file = File::create(&output).with_context(|| format!("unable to create {}", output.display()))?;
    write_ledger_csv(BufWriter::new(file), &study, &result.rows)?;
    println!("\nLedger written to: {}", output.display());

    if let Some(path) = &cli.json {
        let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)?;
        println!("JSON written to: {}", path.display());
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Contributions: ${:.2}", summary.total_contributions);
    println!("  Total Interest: ${:.2}", summary.total_interest);
    println!("  Total Replacements: ${:.2} ({} events)", summary.total_replacement_spend, summary.replacement_events);
    println!("  Final Balance: ${:.2}", summary.final_balance);
    println!("  Lowest Balance: ${:.2}", summary.lowest_balance);
    match summary.first_underfunded_year {
        Some(year) => println!("  First under-funded year: {} ({} years under minimum)",
            study.start_year + year as i32 - 1, summary.underfunded_years),
        None => println!("  Funded in every year"),
    }

    Ok(())
}
