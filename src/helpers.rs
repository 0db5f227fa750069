use crate::character_sets::is_ascii_tab_or_newline;
use std::borrow::Cow;

/// Fast check if input contains tabs or newlines
pub fn has_tabs_or_newline(input: &[u8]) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input).is_some()
}

/// Prune fragment (#hash) from a URL.
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split off the query (?search) from a URL that no longer has a fragment.
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Combined trim and remove tabs/newlines in single pass.
/// Returns a Cow to avoid allocation when possible.
/// Leading/trailing C0 controls and spaces are trimmed; interior spaces are kept.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    let has_control_chars = bytes.iter().any(|&b| b <= 0x20);
    if !has_control_chars {
        return Cow::Borrowed(input);
    }

    let start = bytes.iter().position(|&b| b > 0x20).unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b > 0x20)
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return Cow::Borrowed("");
    }

    let trimmed = &input[start..end];
    if !has_tabs_or_newline(trimmed.as_bytes()) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !(c.is_ascii() && is_ascii_tab_or_newline(c as u8)))
            .collect(),
    )
}

/// Drop all but the last of a leading run of `http://` / `https://` prefixes.
///
/// Crawl logs contain URLs like `http://https://order.1and1.com`, which
/// should be read as `https://order.1and1.com`.
pub fn collapse_repeated_protocols(input: &str) -> &str {
    let mut rest = input;
    loop {
        let next = rest
            .strip_prefix("http://")
            .or_else(|| rest.strip_prefix("https://"));
        match next {
            Some(after) if after.starts_with("http://") || after.starts_with("https://") => {
                rest = after;
            }
            _ => return rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tabs_and_newlines() {
        assert_eq!(clean_tabs_and_newlines("\t\nhello\r\n"), "hello");
        assert_eq!(clean_tabs_and_newlines("hello"), "hello");
        assert_eq!(clean_tabs_and_newlines("\t\n\r"), "");
        assert_eq!(clean_tabs_and_newlines("hel\tlo\nworld"), "helloworld");

        // Spaces are trimmed from the edges but kept internally
        assert_eq!(clean_tabs_and_newlines("  hello  "), "hello");
        assert_eq!(clean_tabs_and_newlines("http:// leadingspace.com/"), "http:// leadingspace.com/");
    }

    #[test]
    fn test_collapse_repeated_protocols() {
        assert_eq!(
            collapse_repeated_protocols("http://https://order.1and1.com"),
            "https://order.1and1.com"
        );
        assert_eq!(
            collapse_repeated_protocols("http://http://http://a.com/"),
            "http://a.com/"
        );
        assert_eq!(collapse_repeated_protocols("https://a.com/"), "https://a.com/");
        assert_eq!(collapse_repeated_protocols("ftp://a.com/"), "ftp://a.com/");
    }

    #[test]
    fn test_prune_fragment_and_query() {
        let (rest, frag) = prune_fragment("/a?b#c?d#e");
        assert_eq!(rest, "/a?b");
        assert_eq!(frag, Some("c?d#e"));

        let (path, query) = split_query(rest);
        assert_eq!(path, "/a");
        assert_eq!(query, Some("b"));

        assert_eq!(split_query("/a"), ("/a", None));
    }
}
