//! Local IPv4 address discovery.

use crate::error::LookupError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

/// Find the address of the interface the OS would route `probe_addr` through.
///
/// Connecting a UDP socket only selects a route; no packet is sent. The socket
/// is dropped before returning.
pub fn local_ipv4(probe_addr: &str) -> Result<Ipv4Addr, LookupError> {
    let target: SocketAddr = probe_addr
        .parse()
        .map_err(|source| LookupError::ProbeAddress {
            addr: probe_addr.to_string(),
            source,
        })?;

    let socket_error = |source: std::io::Error| LookupError::Socket {
        addr: probe_addr.to_string(),
        source,
    };

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(socket_error)?;
    socket.connect(target).map_err(socket_error)?;
    let local = socket.local_addr().map_err(socket_error)?;
    log::debug!("Outbound interface for {probe_addr} has address {}", local.ip());

    match local.ip() {
        IpAddr::V4(addr) => Ok(addr),
        other => Err(LookupError::NotIpv4(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probe_addr() {
        assert!(matches!(
            local_ipv4("not-an-address"),
            Err(LookupError::ProbeAddress { .. })
        ));
        // Host names are not resolved.
        assert!(matches!(
            local_ipv4("dns.google:80"),
            Err(LookupError::ProbeAddress { .. })
        ));
    }

    #[test]
    fn test_loopback_probe() {
        // Routing to loopback needs no network access.
        let addr = local_ipv4("127.0.0.1:9").unwrap();
        assert!(addr.is_loopback());
    }
}
