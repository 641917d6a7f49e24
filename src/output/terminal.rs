//! Terminal output of the network report.

use crate::models::NetworkReport;

pub const LABEL_SSID: &str = "WiFi Network Name (SSID):";
pub const LABEL_IP: &str = "IPv4 Address:";
pub const LABEL_MASK: &str = "Subnet Mask:";
pub const LABEL_RANGE: &str = "Network range:";

/// Format one labelled line; absent values print as `None`.
pub fn format_line(label: &str, value: Option<&str>) -> String {
    format!("{label} {}", value.unwrap_or("None"))
}

/// The four report lines in print order.
pub fn format_report(report: &NetworkReport) -> Vec<String> {
    vec![
        format_line(LABEL_SSID, report.ssid.as_deref()),
        format_line(LABEL_IP, report.ip_address.as_deref()),
        format_line(LABEL_MASK, report.subnet_mask.as_deref()),
        format_line(LABEL_RANGE, report.network_range.as_deref()),
    ]
}

/// Print the report to stdout.
pub fn print_report(report: &NetworkReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(LABEL_IP, Some("10.0.0.5")), "IPv4 Address: 10.0.0.5");
        assert_eq!(
            format_line(LABEL_SSID, None),
            "WiFi Network Name (SSID): None"
        );
    }

    #[test]
    fn test_format_report() {
        let report = NetworkReport {
            ssid: Some("HomeWifi".to_string()),
            ip_address: Some("192.168.1.100".to_string()),
            subnet_mask: Some("255.255.255.0".to_string()),
            network_range: Some("192.168.1.0/24".to_string()),
        };
        assert_eq!(
            format_report(&report),
            vec![
                "WiFi Network Name (SSID): HomeWifi",
                "IPv4 Address: 192.168.1.100",
                "Subnet Mask: 255.255.255.0",
                "Network range: 192.168.1.0/24",
            ]
        );
    }
}
