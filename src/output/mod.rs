//! Output formatting for the network report.
//!
//! - [`terminal`] - four labelled lines
//! - [`json`] - pretty-printed JSON

pub mod json;
pub mod terminal;

use crate::config::OutputFormat;
use crate::models::NetworkReport;
use std::error::Error;

/// Print the report to stdout in the configured format.
pub fn print_report(report: &NetworkReport, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => terminal::print_report(report),
        OutputFormat::Json => json::print_report(report)?,
    }
    Ok(())
}
