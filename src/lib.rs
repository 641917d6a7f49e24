//! Report the host's IPv4 address, assumed subnet mask, WiFi SSID and the
//! CIDR network range derived from them.
//!
//! - [`host`] - OS lookups behind [`NetworkInfoProvider`]
//! - [`models`] - CIDR calculation and report types
//! - [`output`] - text and JSON printing
//! - [`config`] - environment-driven settings
//! - [`logging`] - log4rs setup

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod models;
pub mod output;

use std::error::Error;

pub use error::{InvalidFormatError, LookupError};
pub use host::{NetworkInfoProvider, SystemNetworkInfo};
pub use models::{calculate_network_range, NetworkInfo, NetworkRange, NetworkReport};

/// Look up host network info and compute its network range.
///
/// Address lookup errors and malformed addresses are returned; a missing SSID is not an error.
pub fn build_report(provider: &dyn NetworkInfoProvider) -> Result<NetworkReport, Box<dyn Error>> {
    let info = provider.network_info()?;
    log::debug!("Network info: {:?}", info);
    let report = NetworkReport::from_info(info)?;
    Ok(report)
}
