//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`NetworkRange`] and the dotted-decimal parsing used to turn an
//! address and subnet mask into CIDR notation.

use crate::error::InvalidFormatError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in a dotted-decimal IPv4 address or mask.
pub const OCTETS: usize = 4;

/// Parse a dotted-decimal string (e.g. "192.168.1.100") into its four octets.
///
/// Surrounding whitespace is ignored. Each token must consist of ASCII digits
/// only and fit in 0-255; leading zeros are accepted.
pub fn parse_octets(input: &str) -> Result<[u8; OCTETS], InvalidFormatError> {
    let trimmed = input.trim();
    let tokens: Vec<&str> = trimmed.split('.').collect();
    if tokens.len() != OCTETS {
        return Err(InvalidFormatError::OctetCount {
            input: input.to_string(),
            found: tokens.len(),
        });
    }

    let mut octets = [0u8; OCTETS];
    for (octet, token) in octets.iter_mut().zip(tokens) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidFormatError::NotANumber {
                input: input.to_string(),
                token: token.to_string(),
            });
        }
        // Only digits remain, so a parse failure means overflow.
        *octet = token
            .parse::<u8>()
            .map_err(|_| InvalidFormatError::OutOfRange {
                input: input.to_string(),
                token: token.to_string(),
            })?;
    }
    Ok(octets)
}

/// Parse a dotted-decimal string into an [`Ipv4Addr`].
pub fn parse_addr(input: &str) -> Result<Ipv4Addr, InvalidFormatError> {
    parse_octets(input).map(Ipv4Addr::from)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use wifi_network_info::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, InvalidFormatError> {
    if len > MAX_LENGTH {
        Err(InvalidFormatError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Prefix length of a mask, counted as the total number of 1-bits.
///
/// Contiguity is not checked: `255.0.255.0` counts as /16.
pub fn prefix_len(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// True when the mask is a run of 1-bits followed only by 0-bits.
pub fn is_contiguous_mask(mask: u32) -> bool {
    get_cidr_mask(prefix_len(mask)).is_ok_and(|m| m == mask)
}

/// Network address plus prefix length, written as `a.b.c.d/len`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NetworkRange {
    /// Address with the host bits cleared by the mask.
    pub network: Ipv4Addr,
    /// Number of 1-bits in the mask (0-32).
    pub prefix_len: u8,
}

impl NetworkRange {
    /// Build the range for an address under a mask.
    pub fn new(addr: Ipv4Addr, mask: Ipv4Addr) -> NetworkRange {
        let mask_bits = u32::from(mask);
        if !is_contiguous_mask(mask_bits) {
            log::warn!(
                "Subnet mask {mask} is not contiguous, /{} counts its 1-bits only",
                prefix_len(mask_bits)
            );
        }
        NetworkRange {
            network: Ipv4Addr::from(u32::from(addr) & mask_bits),
            prefix_len: prefix_len(mask_bits),
        }
    }
}

impl std::fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

impl Serialize for NetworkRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Parse an address and mask and compute their [`NetworkRange`].
pub fn network_range(
    ip_address: &str,
    subnet_mask: &str,
) -> Result<NetworkRange, InvalidFormatError> {
    let addr = parse_addr(ip_address)?;
    let mask = parse_addr(subnet_mask)?;
    Ok(NetworkRange::new(addr, mask))
}

/// Calculate the network range in CIDR notation.
///
/// # Examples
/// ```
/// use wifi_network_info::calculate_network_range;
/// assert_eq!(
///     calculate_network_range("192.168.1.100", "255.255.255.0").unwrap(),
///     "192.168.1.0/24"
/// );
/// ```
pub fn calculate_network_range(
    ip_address: &str,
    subnet_mask: &str,
) -> Result<String, InvalidFormatError> {
    network_range(ip_address, subnet_mask).map(|r| r.to_string())
}
