//! Shared helpers for the CLI.

use oxicrc_core::Checksum;

/// Parse an unsigned number given in decimal or `0x`-prefixed hexadecimal.
///
/// Used as a clap `value_parser`.
pub fn parse_number(s: &str) -> Result<u32, String> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", s, e))
}

/// Format a checksum as `0x`-prefixed hex, padded to its width.
pub fn hex(checksum: &Checksum) -> String {
    format!("{:#x}", checksum)
}

/// Format a checksum as dash-separated big-endian bytes, e.g. `17-8C`.
pub fn byte_string(checksum: &Checksum) -> String {
    checksum
        .as_bytes()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxicrc_core::Width;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0x1021"), Ok(0x1021));
        assert_eq!(parse_number("0XFFFF"), Ok(0xFFFF));
        assert_eq!(parse_number("4129"), Ok(4129));
        assert_eq!(parse_number("0x04C1_1DB7"), Ok(0x04C11DB7));
        assert!(parse_number("0xZZ").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_formatting() {
        let checksum = Checksum::new(Width::W16, 0x178C);
        assert_eq!(hex(&checksum), "0x178c");
        assert_eq!(byte_string(&checksum), "17-8C");
        assert_eq!(byte_string(&Checksum::new(Width::W8, 0x07)), "07");
    }
}
