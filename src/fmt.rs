//! Shared pure formatting helpers.
//!
//! Everything here is a function of its arguments only so the renderer and
//! the one-shot reports can stay free of IO.

/// Format a byte count with binary (1024-based) units and two decimals.
///
/// The unit escalates until the magnitude drops below 1024, topping out
/// at PB: `"512.00 B"`, `"1.50 KB"`, `"3.25 GB"`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} {}", value, UNITS[UNITS.len() - 1])
}

/// Format an uptime as the two largest non-zero units among days, hours
/// and minutes: `"2d 5h"`, `"3h 12m"`, `"42m"`. Never emits a zero-valued
/// leading unit; values under a minute render as `"0m"`.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Render a percentage with one decimal: `"42.0%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Dotted-quad IPv4 netmask for a CIDR prefix, e.g. 24 -> `"255.255.255.0"`.
pub fn format_netmask(prefix: u8) -> String {
    let prefix = prefix.min(32) as u32;
    let mask: u32 = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    };
    let octets = mask.to_be_bytes();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0.00 B");
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024), "2.00 TB");
    }

    #[test]
    fn test_format_bytes_magnitude_bound() {
        // The rendered magnitude must stay below 1024 except at the top unit.
        for b in [0u64, 1, 1023, 1024, 1025, 999_999, 1 << 20, 1 << 30, 1 << 40] {
            let s = format_bytes(b);
            let value: f64 = s.split(' ').next().unwrap().parse().unwrap();
            if !s.ends_with("PB") {
                assert!(value < 1024.0, "{} -> {}", b, s);
            }
        }
    }

    #[test]
    fn test_format_bytes_round_trip() {
        // Reparsing the formatted value and scaling it back must agree with
        // the original within two-decimal precision of the chosen unit.
        let scales = [
            ("PB", 1u64 << 50),
            ("TB", 1 << 40),
            ("GB", 1 << 30),
            ("MB", 1 << 20),
            ("KB", 1 << 10),
            ("B", 1),
        ];
        for b in [0u64, 7, 1024, 123_456_789, 987_654_321_000] {
            let s = format_bytes(b);
            let mut parts = s.split(' ');
            let value: f64 = parts.next().unwrap().parse().unwrap();
            let unit = parts.next().unwrap();
            let scale = scales.iter().find(|(u, _)| *u == unit).unwrap().1 as f64;
            let reconstructed = value * scale;
            // Half a hundredth of the unit is the rounding bound.
            assert!((reconstructed - b as f64).abs() <= scale * 0.005 + 1e-9);
        }
    }

    #[test]
    fn test_format_uptime_tiers() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3 * 3600 + 5 * 60), "3h 5m");
        assert_eq!(format_uptime(2 * 86400 + 7 * 3600), "2d 7h");
    }

    #[test]
    fn test_format_uptime_no_leading_zero_unit() {
        // 0 days and 3 hours must not render as "0d 3h".
        assert_eq!(format_uptime(3 * 3600), "3h 0m");
        assert!(!format_uptime(3 * 3600).starts_with("0d"));
        assert!(!format_uptime(5 * 60).starts_with("0h"));
    }

    #[test]
    fn test_format_netmask() {
        assert_eq!(format_netmask(0), "0.0.0.0");
        assert_eq!(format_netmask(8), "255.0.0.0");
        assert_eq!(format_netmask(24), "255.255.255.0");
        assert_eq!(format_netmask(32), "255.255.255.255");
        // Prefixes above 32 are clamped.
        assert_eq!(format_netmask(64), "255.255.255.255");
    }
}
