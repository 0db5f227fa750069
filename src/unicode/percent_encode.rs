use percent_encoding::{AsciiSet, CONTROLS, percent_decode, percent_encode};
use std::borrow::Cow;

/// Canonical escape set.
///
/// C0 controls, DEL, space, `#` and `%` are escaped; every other printable
/// ASCII byte is left alone. Non-ASCII bytes are always escaped.
pub const CANONICAL_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'#').add(b'%');

/// Decode every well-formed `%XX` triplet once.
/// Malformed sequences (`%`, `%2`, `%zz`) are kept verbatim.
pub fn unescape_once(input: &[u8]) -> Cow<'_, [u8]> {
    percent_decode(input).into()
}

/// Percent-decode until the output stops changing.
///
/// Every effective pass strictly shortens the input, so this terminates
/// even on deeply nested encodings such as `%2525252525252525`.
pub fn unescape_repeatedly(input: &[u8]) -> Vec<u8> {
    let mut current = match unescape_once(input) {
        Cow::Borrowed(_) => return input.to_vec(),
        Cow::Owned(decoded) => decoded,
    };
    loop {
        match unescape_once(&current) {
            Cow::Borrowed(_) => return current,
            Cow::Owned(decoded) => current = decoded,
        }
    }
}

/// Escape every byte in [`CANONICAL_SET`] and every non-ASCII byte.
/// The result is always ASCII.
pub fn escape_once(input: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(input.len());
    escape_once_into(&mut buffer, input);
    buffer
}

/// Escape directly into an existing buffer
pub fn escape_once_into(buffer: &mut Vec<u8>, input: &[u8]) {
    buffer.reserve(input.len());
    for chunk in percent_encode(input, CANONICAL_SET) {
        buffer.extend_from_slice(chunk.as_bytes());
    }
}

/// Collapse redundant escaping to a single canonical escaped form.
pub fn minimal_escape(input: &[u8]) -> Vec<u8> {
    escape_once(&unescape_repeatedly(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(input: &str) -> String {
        String::from_utf8(unescape_repeatedly(input.as_bytes())).unwrap_or_default()
    }

    #[test]
    fn test_unescape_repeatedly() {
        assert_eq!(unescape("%!A%21%21%25"), "%!A!!%");
        assert_eq!(unescape("%"), "%");
        assert_eq!(unescape("%2"), "%2");
        assert_eq!(unescape("%25"), "%");
        assert_eq!(unescape("%25%"), "%%");
        assert_eq!(unescape("%2525"), "%");
        assert_eq!(unescape("%252525"), "%");
        assert_eq!(unescape("%25%32%35"), "%");
        assert_eq!(unescape("%2525252525252525"), "%");
    }

    #[test]
    fn test_unescape_is_fixed_point() {
        for input in ["%25%32%35", "%%%25%32%35asd%%", "plain", "%zz%2", "%C3%A9"] {
            let once = unescape_repeatedly(input.as_bytes());
            assert_eq!(unescape_repeatedly(&once), once, "{input}");
        }
    }

    #[test]
    fn test_escape_once() {
        assert_eq!(escape_once(b"a b"), b"a%20b");
        assert_eq!(escape_once(b"100%"), b"100%25");
        assert_eq!(escape_once(b"ab#cd"), b"ab%23cd");
        assert_eq!(escape_once(b"\x01\x7f"), b"%01%7F");
        assert_eq!(escape_once("é".as_bytes()), b"%C3%A9");
        assert_eq!(
            escape_once(b"!\"$&'()*+,-./:;<=>?@[\\]^_`{|}~"),
            b"!\"$&'()*+,-./:;<=>?@[\\]^_`{|}~"
        );
    }

    #[test]
    fn test_minimal_escape() {
        assert_eq!(minimal_escape(b"%25%32%35"), b"%25");
        assert_eq!(minimal_escape(b"%%%25%32%35asd%%"), b"%25%25%25asd%25%25");
        assert_eq!(
            minimal_escape(b"%257Ea%2521b%2540c%2523d%2524e%25f%255E00%252611%252A22%252833%252944_55%252B"),
            b"~a!b@c%23d$e%25f^00&11*22(33)44_55+"
        );
    }
}
