use crate::types::SchemeType;

/// Get the scheme type from a scheme string (case-insensitive).
/// Filters by length first, then compares the bytes.
pub fn get_scheme_type(scheme: &[u8]) -> SchemeType {
    match scheme.len() {
        3 if scheme.eq_ignore_ascii_case(b"dns") => SchemeType::Dns,
        4 if scheme.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        5 if scheme.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Check whether `input` begins with something that looks like a scheme:
/// `[A-Za-z][A-Za-z0-9+.-]*:`. Returns the length of the scheme (without `:`).
pub fn scheme_prefix_len(input: &[u8]) -> Option<usize> {
    let first = *input.first()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    for (i, &b) in input.iter().enumerate().skip(1) {
        match b {
            b':' => return Some(i),
            b if crate::character_sets::is_scheme_byte(b) => {}
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type(b"http"), SchemeType::Http);
        assert_eq!(get_scheme_type(b"HTTPS"), SchemeType::Https);
        assert_eq!(get_scheme_type(b"dns"), SchemeType::Dns);
        assert_eq!(get_scheme_type(b"ftp"), SchemeType::NotSpecial);
    }

    #[test]
    fn test_scheme_prefix_len() {
        assert_eq!(scheme_prefix_len(b"http://x"), Some(4));
        assert_eq!(scheme_prefix_len(b"svn+ssh://x"), Some(7));
        assert_eq!(scheme_prefix_len(b"dns:archive.org"), Some(3));
        // "www.google.com:80" looks like a scheme and is treated as one
        assert_eq!(scheme_prefix_len(b"www.google.com:80"), Some(14));
        assert_eq!(scheme_prefix_len(b"B\xc3\xbccher.ch:8080"), None);
        assert_eq!(scheme_prefix_len(b"%20leadingspace.com/"), None);
        assert_eq!(scheme_prefix_len(b"1http://x"), None);
        assert_eq!(scheme_prefix_len(b"noscheme"), None);
    }
}
