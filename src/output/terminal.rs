//! Terminal output utilities.
//!
//! Formatting helpers for showing a [`SubnetResult`] on a console: dotted
//! octets with a color per position, mask bits split into network and host
//! colors, and grouped address counts.

use crate::models::SubnetResult;
use colored::{Color, Colorize};
use itertools::Itertools;
use std::net::Ipv4Addr;

const OCTET_COLORS: [Color; 4] = [Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Join octets with `.`.
pub fn octets_to_dot_notation(octets: &[u8]) -> String {
    octets.iter().join(".")
}

/// Group digits in threes, `16777216` -> `16,777,216`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let first = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dotted address with each octet in its own color.
pub fn color_octets(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .zip(OCTET_COLORS)
        .map(|(octet, color)| octet.to_string().as_str().color(color).to_string())
        .join(".")
}

/// 32 bits in four dotted groups; the first `prefix` bits are network bits.
pub fn bit_string(addr: Ipv4Addr, prefix: u8) -> String {
    let bits = u32::from(addr);
    (0..4)
        .map(|group| {
            (0..8)
                .map(|i| {
                    let pos = group * 8 + i;
                    let bit = if bits & (1 << (31 - pos)) != 0 { "1" } else { "0" };
                    if pos < prefix as u32 {
                        bit.blue().to_string()
                    } else {
                        bit.bright_black().to_string()
                    }
                })
                .collect::<String>()
        })
        .join(".")
}

/// Multi-line report of a calculation.
pub fn render(result: &SubnetResult) -> String {
    let counts = result.counts();
    let label = |s: &str| format!("{:<19}", s).as_str().bold().to_string();
    [
        format!("{}{}", label("Address:"), color_octets(result.ip)),
        format!("{}{}", label(""), bit_string(result.ip, result.prefix)),
        format!("{}{}", label("Subnet mask:"), color_octets(result.mask)),
        format!("{}{}", label(""), bit_string(result.mask, result.prefix)),
        format!("{}/{}", label("CIDR prefix:"), result.prefix),
        format!(
            "{}{}",
            label("Network address:"),
            octets_to_dot_notation(&result.network.octets())
        ),
        format!(
            "{}{}",
            label("Broadcast address:"),
            octets_to_dot_notation(&result.broadcast.octets())
        ),
        format!(
            "{}{}",
            label("Total addresses:"),
            group_thousands(counts.total)
        ),
        format!(
            "{}{}",
            label("Usable addresses:"),
            group_thousands(counts.usable)
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_octets_to_dot_notation() {
        assert_eq!(octets_to_dot_notation(&[192, 168, 1, 0]), "192.168.1.0");
        assert_eq!(octets_to_dot_notation(&[]), "");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(254), "254");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(65536), "65,536");
        assert_eq!(group_thousands(16777216), "16,777,216");
        assert_eq!(group_thousands(4294967296), "4,294,967,296");
    }

    #[test]
    fn test_plain_rendering() {
        colored::control::set_override(false);
        let mask = Ipv4Addr::new(255, 255, 255, 0);
        assert_eq!(color_octets(mask), "255.255.255.0");
        assert_eq!(
            bit_string(mask, 24),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            bit_string(Ipv4Addr::new(10, 0, 0, 5), 8),
            "00001010.00000000.00000000.00000101"
        );
    }

    #[test]
    fn test_render() {
        colored::control::set_override(false);
        let out = render(&calculate("10.0.0.5/8").unwrap());
        assert!(out.contains("Network address:   10.0.0.0"));
        assert!(out.contains("Broadcast address: 10.255.255.255"));
        assert!(out.contains("Total addresses:   16,777,216"));
        assert!(out.contains("Usable addresses:  16,777,214"));
        // every value starts in the same column
        for line in out.lines() {
            assert_eq!(line.chars().nth(18), Some(' '), "{line:?}");
        }
        assert_eq!(out.lines().count(), 9);
    }
}
