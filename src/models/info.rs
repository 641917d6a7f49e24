//! Host network info and the report built from it.

use super::ipv4::network_range;
use crate::error::InvalidFormatError;
use serde::Serialize;

/// Result of a host network lookup. Any field may be absent.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    /// IPv4 address of the outbound interface.
    pub ip_address: Option<String>,
    /// Subnet mask assumed for that address.
    pub subnet_mask: Option<String>,
    /// Name of the associated WiFi network.
    pub ssid: Option<String>,
}

/// Lookup result plus the computed network range.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkReport {
    pub ssid: Option<String>,
    pub ip_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub network_range: Option<String>,
}

impl NetworkReport {
    /// Compute the network range for `info`.
    ///
    /// A missing address or mask leaves the range empty; a malformed one is an error.
    pub fn from_info(info: NetworkInfo) -> Result<NetworkReport, InvalidFormatError> {
        let network_range = match (&info.ip_address, &info.subnet_mask) {
            (Some(ip), Some(mask)) => Some(network_range(ip, mask)?.to_string()),
            (ip, mask) => {
                log::warn!(
                    "Cannot calculate network range: ip_address={:?} subnet_mask={:?}",
                    ip,
                    mask
                );
                None
            }
        };

        Ok(NetworkReport {
            ssid: info.ssid,
            ip_address: info.ip_address,
            subnet_mask: info.subnet_mask,
            network_range,
        })
    }
}
