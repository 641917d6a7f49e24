//! The [`NetworkInfoProvider`] seam between OS lookups and the report.

use super::address::local_ipv4;
use super::ssid::{read_ssid, SsidSource};
use crate::config::Config;
use crate::error::LookupError;
use crate::models::NetworkInfo;

/// Source of the host's network info.
pub trait NetworkInfoProvider {
    /// Look up the address, mask and SSID.
    ///
    /// A missing SSID is `None`. Failing to find the address is an error.
    fn network_info(&self) -> Result<NetworkInfo, LookupError>;
}

/// Reads network info from the running machine.
#[derive(Debug, Clone)]
pub struct SystemNetworkInfo {
    probe_addr: String,
    subnet_mask: String,
    ssid_source: SsidSource,
}

impl SystemNetworkInfo {
    pub fn new(config: &Config) -> SystemNetworkInfo {
        SystemNetworkInfo {
            probe_addr: config.probe_addr.clone(),
            subnet_mask: config.subnet_mask.clone(),
            ssid_source: SsidSource::for_platform(),
        }
    }
}

impl NetworkInfoProvider for SystemNetworkInfo {
    fn network_info(&self) -> Result<NetworkInfo, LookupError> {
        let ip_address = local_ipv4(&self.probe_addr)?;
        log::info!("Local IPv4 address {ip_address} via {}", self.probe_addr);

        let ssid = read_ssid(self.ssid_source);
        log::info!("SSID: {:?}", ssid);

        Ok(NetworkInfo {
            ip_address: Some(ip_address.to_string()),
            subnet_mask: Some(self.subnet_mask.clone()),
            ssid,
        })
    }
}
