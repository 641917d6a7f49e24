//! JSON output of the network report.

use crate::models::NetworkReport;
use std::error::Error;

pub fn format_report(report: &NetworkReport) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing JSON: {e}").into())
}

pub fn print_report(report: &NetworkReport) -> Result<(), Box<dyn Error>> {
    println!("{}", format_report(report)?);
    Ok(())
}
