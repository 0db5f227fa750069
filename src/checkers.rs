/// Check if a host is a syntactically valid dotted quad: exactly four groups
/// of one to three decimal digits. Octet values are not range-checked.
///
/// Only such hosts are exempt from SURT label reversal.
pub fn is_dotted_quad(host: &[u8]) -> bool {
    let mut groups = 0;
    for group in host.split(|&b| b == b'.') {
        groups += 1;
        if groups > 4 || group.is_empty() || group.len() > 3 {
            return false;
        }
        if !group.iter().all(u8::is_ascii_digit) {
            return false;
        }
    }
    groups == 4
}

/// Check if a host consists only of ASCII digits (a bare 32-bit address).
pub fn is_all_digits(host: &[u8]) -> bool {
    !host.is_empty() && host.iter().all(u8::is_ascii_digit)
}

/// Check the shape `[1-9][0-9]*(\.[0-9]+){0,3}`: a decimal address with up
/// to four groups, the first without a leading zero.
pub fn is_decimal_ip_shape(host: &[u8]) -> bool {
    matches!(host.first(), Some(b'1'..=b'9')) && has_ip_groups(host, u8::is_ascii_digit)
}

/// Check the shape `0[0-7]*(\.[0-7]+){0,3}`: an octal address with up to
/// four groups, the first starting with `0`.
pub fn is_octal_ip_shape(host: &[u8]) -> bool {
    host.first() == Some(&b'0') && has_ip_groups(host, |b| matches!(b, b'0'..=b'7'))
}

fn has_ip_groups(host: &[u8], is_digit: impl Fn(&u8) -> bool) -> bool {
    let mut groups = 0;
    for group in host.split(|&b| b == b'.') {
        groups += 1;
        if groups > 4 || group.is_empty() || !group.iter().all(&is_digit) {
            return false;
        }
    }
    true
}

/// Parse a port to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &[u8]) -> Option<u16> {
    if port.is_empty() || !port.iter().all(u8::is_ascii_digit) {
        return None;
    }
    core::str::from_utf8(port).ok()?.parse::<u16>().ok()
}
