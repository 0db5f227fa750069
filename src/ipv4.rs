/// IPv4 literal handling for host canonicalization.
///
/// Hosts written as numbers, octal groups or short forms are rewritten to
/// their dotted-quad form, matching the lenient behavior of historical
/// crawlers (`017.0.0.1` is `15.0.0.1`, `10.0.258` is `10.0.1.2`).
use crate::checkers::{is_all_digits, is_decimal_ip_shape, is_octal_ip_shape};
use crate::resolver::Resolver;
use std::net::Ipv4Addr;

/// Parse an address the way `inet_aton` does.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Short forms: 10.0.258 (the last group fills the remaining bytes)
pub fn parse_ipv4(input: &str) -> Option<u32> {
    if input.is_empty() {
        return None;
    }

    let parts: Vec<&str> = input.split('.').collect();
    let part_count = parts.len();

    if part_count > 4 {
        return None;
    }

    let numbers = parts
        .iter()
        .map(|part| parse_ipv4_number(part))
        .collect::<Option<Vec<u64>>>()?;

    // Last number must be < 256^(5-n)
    let last = numbers[part_count - 1];
    let max = 256u64.pow((5 - part_count) as u32);
    if last >= max {
        return None;
    }

    // All but the last number must be < 256
    if numbers.iter().take(part_count - 1).any(|&num| num >= 256) {
        return None;
    }

    let mut ipv4: u32 = 0;

    // Each of the first (n-1) parts is a single byte, most significant first
    for (i, &number) in numbers.iter().enumerate().take(part_count - 1) {
        let byte_pos = 3 - i;
        ipv4 |= (number as u32) << (byte_pos * 8);
    }

    // The last part fills the remaining bytes
    ipv4 |= last as u32;

    Some(ipv4)
}

/// Parse a single number component (decimal, `0x` hex, or leading-zero octal).
fn parse_ipv4_number(input: &str) -> Option<u64> {
    if input.is_empty() {
        return None;
    }

    if let Some(hex_part) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return if hex_part.is_empty() {
            Some(0)
        } else {
            u64::from_str_radix(hex_part, 16).ok()
        };
    }

    if input.len() >= 2 && input.starts_with('0') {
        return u64::from_str_radix(input, 8).ok();
    }

    input.parse::<u64>().ok()
}

/// Interpret an all-digit host as a 32-bit address, keeping only the low
/// 32 bits. Some archived crawl records carry numeric hosts above 2^32.
pub fn digits_to_ipv4(digits: &[u8]) -> Ipv4Addr {
    let value = digits.iter().fold(0u32, |acc, &d| {
        acc.wrapping_mul(10).wrapping_add(u32::from(d - b'0'))
    });
    Ipv4Addr::from(value)
}

/// Try to read `host` as an IPv4 literal and return its dotted-quad form.
///
/// Returns `None` when the host is not an address or the resolver cannot
/// make sense of it; that is never an error.
pub fn attempt_ip_formats(host: &[u8], resolver: &dyn Resolver) -> Option<String> {
    if is_all_digits(host) {
        return Some(digits_to_ipv4(host).to_string());
    }

    if is_decimal_ip_shape(host) || is_octal_ip_shape(host) {
        let candidate = core::str::from_utf8(host).ok()?;
        let resolved = resolver.resolve(candidate);
        if resolved.is_none() {
            tracing::trace!(host = candidate, "address-shaped host did not resolve");
        }
        return resolved.map(|addr| addr.to_string());
    }

    None
}
