// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use chrono::NaiveDate;
use location::application::ReservationLedger;
use location::session::{Session, SessionSummary};

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to run a full session over scripted input, one answer per line.
/// Returns the transcript and the session counters.
pub fn run_script(ledger: &mut ReservationLedger, lines: &[&str]) -> Result<(String, SessionSummary)> {
    let mut input = lines.join("\n");
    input.push('\n');
    run_bytes(ledger, input.as_bytes())
}

/// Like `run_script`, but with raw input bytes that need not be UTF-8.
pub fn run_bytes(ledger: &mut ReservationLedger, input: &[u8]) -> Result<(String, SessionSummary)> {
    let mut output = Vec::new();
    let summary = Session::new(ledger, Cursor::new(input), &mut output).run()?;
    Ok((String::from_utf8(output)?, summary))
}

/// Test fixture: the Car/House bookings used across tests
pub struct StandardBookings;

impl StandardBookings {
    /// Car on 2024-01-01..=2024-01-03 and 2024-01-04..=2024-01-05,
    /// House on 2024-01-01
    pub fn create(ledger: &mut ReservationLedger) -> Result<()> {
        ledger.attempt_reservation("2024-01-01", "3", "Car")?;
        ledger.attempt_reservation("2024-01-04", "2", "Car")?;
        ledger.attempt_reservation("2024-01-01", "1", "House")?;
        Ok(())
    }
}
