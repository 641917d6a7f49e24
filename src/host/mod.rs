//! Host network lookups.
//!
//! - [`address`] - local IPv4 address via a UDP route probe
//! - [`ssid`] - WiFi SSID via the platform status command
//! - [`cli`] - external command execution
//! - [`provider`] - the [`NetworkInfoProvider`] trait and its system implementation

mod address;
mod cli;
mod provider;
mod ssid;

// Re-export public types and functions
pub use address::local_ipv4;
pub use provider::{NetworkInfoProvider, SystemNetworkInfo};
pub use ssid::{read_ssid, SsidSource};
