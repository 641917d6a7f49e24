//! Domain models for the network info report.
//!
//! - [`NetworkRange`] - network address plus prefix length
//! - [`NetworkInfo`] - what the host lookup returns
//! - [`NetworkReport`] - what the binary prints

mod info;
mod ipv4;

// Re-export public types
pub use info::{NetworkInfo, NetworkReport};
pub use ipv4::{
    calculate_network_range, get_cidr_mask, is_contiguous_mask, network_range, parse_addr,
    parse_octets, prefix_len, NetworkRange, MAX_LENGTH, OCTETS,
};
