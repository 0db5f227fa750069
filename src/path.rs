//! Path normalization and ASP.NET session-ID stripping.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// Cookieless ASP.NET session markers embedded as a path segment in front
/// of an `.aspx` resource, tried in order.
#[allow(clippy::unwrap_used)]
static PATH_SESSION_IDS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i-u)^(.*/)(\((?:[a-z]\([0-9a-z]{24}\))+\)/)([^?]+\.aspx.*)$").unwrap(),
        Regex::new(r"(?i-u)^(.*/)(\([0-9a-z]{24}\)/)([^?]+\.aspx.*)$").unwrap(),
    ]
});

/// Resolve `.` and `..` segments and collapse empty segments.
///
/// The text before the first `/` is always dropped. A `..` with nothing
/// left to pop is kept literally. A trailing `/` survives. The input must
/// already be percent-decoded: `%2e%2e` is an ordinary segment.
pub fn normalize_path(path: &[u8]) -> Vec<u8> {
    if path.is_empty() {
        return b"/".to_vec();
    }

    let mut kept: Vec<&[u8]> = Vec::new();
    for segment in path.split(|&b| b == b'/').skip(1) {
        match segment {
            b"." => {}
            b".." => {
                if kept.pop().is_none() {
                    kept.push(segment);
                }
            }
            _ => kept.push(segment),
        }
    }

    let mut out = Vec::with_capacity(path.len() + 1);
    out.push(b'/');
    if let Some((last, interior)) = kept.split_last() {
        for segment in interior.iter().filter(|segment| !segment.is_empty()) {
            out.extend_from_slice(segment);
            out.push(b'/');
        }
        out.extend_from_slice(last);
    }
    out
}

/// Remove a cookieless ASP.NET session segment, e.g.
/// `/(S(4hqa0555fwsecu455xqckv45))/mileg.aspx` becomes `/mileg.aspx`.
pub fn strip_path_session_id(path: &[u8]) -> Vec<u8> {
    let mut path = path.to_vec();
    for pattern in PATH_SESSION_IDS.iter() {
        let stripped = pattern.captures(&path).map(|caps| {
            let mut stripped = caps[1].to_vec();
            stripped.extend_from_slice(&caps[3]);
            stripped
        });
        if let Some(stripped) = stripped {
            path = stripped;
        }
    }
    path
}
