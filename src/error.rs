//! Error types.
//!
//! [`InvalidFormatError`] is the only failure of the CIDR calculator.
//! [`LookupError`] covers the host address lookup, which the binary treats as fatal.

use thiserror::Error;

/// A dotted-decimal address or mask could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidFormatError {
    #[error("invalid format '{input}': expected 4 dot-separated octets, found {found}")]
    OctetCount { input: String, found: usize },

    #[error("invalid format '{input}': octet '{token}' is not a non-negative integer")]
    NotANumber { input: String, token: String },

    #[error("invalid format '{input}': octet '{token}' is outside 0-255")]
    OutOfRange { input: String, token: String },

    #[error("prefix length /{0} is too long")]
    PrefixTooLong(u8),
}

/// The local IPv4 address could not be determined.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid probe address '{addr}': {source}")]
    ProbeAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("socket error while probing {addr}: {source}")]
    Socket {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("outbound interface address {0} is not IPv4")]
    NotIpv4(std::net::IpAddr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let e = InvalidFormatError::OctetCount {
            input: "10.0.0".to_string(),
            found: 3,
        };
        assert_eq!(
            e.to_string(),
            "invalid format '10.0.0': expected 4 dot-separated octets, found 3"
        );
        assert_eq!(
            InvalidFormatError::PrefixTooLong(33).to_string(),
            "prefix length /33 is too long"
        );
    }

    #[test]
    fn test_lookup_error_display() {
        let e = LookupError::NotIpv4("::1".parse().unwrap());
        assert_eq!(e.to_string(), "outbound interface address ::1 is not IPv4");
    }
}
