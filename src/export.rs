//! CSV export of a study ledger

use std::io::Write;

use csv::{Terminator, Writer, WriterBuilder};

use crate::error::DataError;
use crate::projection::LedgerRow;
use crate::study::ReserveStudy;

const STUDY_HEADER: [&str; 7] = [
    "property",
    "start_year",
    "projection_years",
    "inflation_rate",
    "interest_rate",
    "starting_balance",
    "annual_contribution",
];

const LEDGER_HEADER: [&str; 8] = [
    "year",
    "calendar_year",
    "beginning_balance",
    "contribution",
    "interest_earned",
    "replacement_spend",
    "ending_balance",
    "funded_status",
];

/// Write the study header block, a blank line, then one line per ledger year
///
/// Money columns are written with two decimals; `calendar_year` is empty
/// for rows projected without a start year.
pub fn write_ledger_csv<W: Write>(mut writer: W, study: &ReserveStudy, rows: &[LedgerRow]) -> Result<(), DataError> {
    let a = &study.assumptions;
    let mut header = csv_writer(&mut writer);
    header.write_record(STUDY_HEADER)?;
    header.write_record([
        study.property_name.clone(),
        study.start_year.to_string(),
        a.projection_years.to_string(),
        a.inflation_rate.to_string(),
        a.interest_rate.to_string(),
        money(a.starting_balance),
        money(a.annual_contribution),
    ])?;
    header.flush()?;
    drop(header);

    // Blank separator line
    writer.write_all(b"\n")?;

    let mut ledger = csv_writer(&mut writer);
    ledger.write_record(LEDGER_HEADER)?;
    for row in rows {
        ledger.write_record([
            row.year.to_string(),
            row.calendar_year.map(|y| y.to_string()).unwrap_or_default(),
            money(row.beginning_balance),
            money(row.contribution),
            money(row.interest_earned),
            money(row.replacement_spend),
            money(row.ending_balance),
            row.funded_status.to_string(),
        ])?;
    }
    ledger.flush()?;

    Ok(())
}

fn csv_writer<W: Write>(writer: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Download file name for a study, e.g. `reserve_study_Maple_Court.csv`
pub fn export_file_name(property_name: &str) -> String {
    format!("reserve_study_{}.csv", property_name.trim().replace(' ', "_"))
}

fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}
