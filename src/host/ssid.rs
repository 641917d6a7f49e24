//! WiFi SSID lookup through the platform's wireless status command.
//!
//! A missing SSID is an expected outcome (wired host, radio off, tool not
//! installed), so every failure here ends up as `None`.

use super::cli;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

/// How to query and parse the SSID on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SsidSource {
    /// `netsh wlan show interfaces` (Windows).
    Netsh,
    /// `networksetup -getairportnetwork en0` (macOS).
    Networksetup,
    /// `nmcli -t -f active,ssid dev wifi` (Linux and other Unix).
    Nmcli,
}

static NETSH_REGEX: OnceLock<Regex> = OnceLock::new();
static NETWORKSETUP_REGEX: OnceLock<Regex> = OnceLock::new();
static NMCLI_REGEX: OnceLock<Regex> = OnceLock::new();

impl SsidSource {
    /// Source for the platform this binary was built for.
    pub fn for_platform() -> SsidSource {
        if cfg!(target_os = "windows") {
            SsidSource::Netsh
        } else if cfg!(target_os = "macos") {
            SsidSource::Networksetup
        } else {
            SsidSource::Nmcli
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            SsidSource::Netsh => "netsh wlan show interfaces",
            SsidSource::Networksetup => "networksetup -getairportnetwork en0",
            SsidSource::Nmcli => "nmcli -t -f active,ssid dev wifi",
        }
    }

    fn pattern(&self) -> &'static Regex {
        // Case-sensitive keys; `^\s*SSID` skips the BSSID line of netsh.
        // Only blanks may follow the colon so an empty value stays on its line.
        match self {
            SsidSource::Netsh => NETSH_REGEX.get_or_init(|| {
                Regex::new(r"(?m)^\s*SSID[ \t]*:[ \t]*(.*)$").expect("Invalid Regex")
            }),
            SsidSource::Networksetup => NETWORKSETUP_REGEX.get_or_init(|| {
                Regex::new(r"(?m)^Current Wi-Fi Network:[ \t]*(.*)$").expect("Invalid Regex")
            }),
            SsidSource::Nmcli => {
                NMCLI_REGEX.get_or_init(|| Regex::new(r"(?m)^yes:(.*)$").expect("Invalid Regex"))
            }
        }
    }

    /// Extract the SSID from the command output. The first match wins.
    pub fn parse(&self, output: &str) -> Option<String> {
        let captures = self.pattern().captures(output)?;
        let raw = captures.get(1)?.as_str().trim();
        let ssid = match self {
            SsidSource::Nmcli => raw.replace("\\:", ":").replace("\\\\", "\\"),
            _ => raw.to_string(),
        };
        if ssid.is_empty() {
            None
        } else {
            Some(ssid)
        }
    }
}

/// Run the platform command and parse the SSID, or `None` on any failure.
pub fn read_ssid(source: SsidSource) -> Option<String> {
    read_ssid_with(source, source.command())
}

/// Run `cmd` and parse its output the way `source` expects.
fn read_ssid_with(source: SsidSource, cmd: &str) -> Option<String> {
    let output = match cli::run(cmd) {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Could not read SSID with {cmd}: {e}", cmd = cmd.on_blue());
            return None;
        }
    };

    let ssid = source.parse(&output);
    if ssid.is_none() {
        log::debug!("No SSID found in output of {cmd}");
    }
    ssid
}

#[cfg(test)]
mod tests {
    use super::*;

    const NETSH_CONNECTED: &str = include_str!("../tests/test_data/netsh_connected.txt");
    const NETSH_DISCONNECTED: &str = include_str!("../tests/test_data/netsh_disconnected.txt");
    const NMCLI_CONNECTED: &str = include_str!("../tests/test_data/nmcli_connected.txt");

    #[test]
    fn test_netsh_connected() {
        assert_eq!(
            SsidSource::Netsh.parse(NETSH_CONNECTED),
            Some("Cafe Guest 5G".to_string())
        );
    }

    #[test]
    fn test_netsh_disconnected() {
        assert_eq!(SsidSource::Netsh.parse(NETSH_DISCONNECTED), None);
    }

    #[test]
    fn test_netsh_key_is_case_sensitive() {
        assert_eq!(SsidSource::Netsh.parse("    ssid : lower\n"), None);
    }

    #[test]
    fn test_netsh_first_match_used() {
        let output = "    SSID                   : first\n    SSID                   : second\n";
        assert_eq!(SsidSource::Netsh.parse(output), Some("first".to_string()));
    }

    #[test]
    fn test_netsh_crlf() {
        let output = "    BSSID : aa:bb\r\n    SSID  : Office\r\n";
        assert_eq!(SsidSource::Netsh.parse(output), Some("Office".to_string()));
    }

    #[test]
    fn test_netsh_blank_value_is_absent() {
        let output = "    State : connected\n    SSID                   : \n    AP BSSID               : 8c:3b:ad:44:55:66\n";
        assert_eq!(SsidSource::Netsh.parse(output), None);
    }

    #[test]
    fn test_networksetup_blank_value_is_absent() {
        assert_eq!(
            SsidSource::Networksetup.parse("Current Wi-Fi Network: \nnext line\n"),
            None
        );
    }

    #[test]
    fn test_read_ssid_missing_command_is_none() {
        assert_eq!(
            read_ssid_with(SsidSource::Netsh, "definitely-not-a-real-program-4f1c wlan"),
            None
        );
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_read_ssid_netsh_off_windows_is_none() {
        assert_eq!(read_ssid(SsidSource::Netsh), None);
    }

    #[test]
    fn test_networksetup() {
        assert_eq!(
            SsidSource::Networksetup.parse("Current Wi-Fi Network: HomeNet\n"),
            Some("HomeNet".to_string())
        );
        assert_eq!(
            SsidSource::Networksetup
                .parse("You are not associated with an AirPort network.\n"),
            None
        );
    }

    #[test]
    fn test_nmcli() {
        assert_eq!(
            SsidSource::Nmcli.parse(NMCLI_CONNECTED),
            Some("Lab:Floor2".to_string())
        );
        assert_eq!(SsidSource::Nmcli.parse("no:Neighbour\nno:Other\n"), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(SsidSource::Netsh.command(), "netsh wlan show interfaces");
        assert!(SsidSource::for_platform().command().contains(' '));
    }
}
