//! Host normalization and SURT host reversal.

use crate::checkers::is_dotted_quad;
use crate::ipv4::attempt_ip_formats;
use crate::resolver::Resolver;
use crate::unicode::idna::host_to_ascii;
use crate::unicode::percent_encode::{escape_once, unescape_repeatedly};
use regex::bytes::Regex;
use std::sync::LazyLock;

#[allow(clippy::unwrap_used)]
static WWW_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u)^www[0-9]*\.").unwrap());

/// Normalize a host the way search-engine canonicalization does.
///
/// 1. percent-decode to a fixed point
/// 2. non-ASCII hosts go through IDNA `ToASCII`, keeping the decoded text
///    when that fails
/// 3. collapse dot runs and strip leading and trailing dots
/// 4. rewrite address-shaped hosts to dotted-quad form
/// 5. otherwise lowercase and escape
///
/// Returns `None` when nothing is left of the host.
pub fn normalize_host(host: &[u8], resolver: &dyn Resolver) -> Option<Vec<u8>> {
    let unescaped = unescape_repeatedly(host);
    let ascii = host_to_ascii(&unescaped);
    let collapsed = collapse_dots(&ascii);

    let normalized = match attempt_ip_formats(&collapsed, resolver) {
        Some(ip) => ip.into_bytes(),
        None => escape_once(&collapsed.to_ascii_lowercase()),
    };

    (!normalized.is_empty()).then_some(normalized)
}

/// Collapse every run of `.` to a single dot and strip dots from both ends.
pub fn collapse_dots(host: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(host.len());
    for label in host.split(|&b| b == b'.').filter(|label| !label.is_empty()) {
        if !out.is_empty() {
            out.push(b'.');
        }
        out.extend_from_slice(label);
    }
    out
}

/// Strip one leading `www.` / `www<digits>.` label.
///
/// `www2.www2foo.com` becomes `www2foo.com`; the result is not massaged
/// again.
pub fn massage_host(host: &[u8]) -> &[u8] {
    WWW_PREFIX
        .find(host)
        .map_or(host, |found| &host[found.end()..])
}

/// Reverse host labels for a SURT key.
///
/// Returns the reversed host and the byte, if any, that goes right before
/// the closing `)` of the authority. Dotted quads are left alone unless
/// `reverse_ipaddr` is set, and never get a trailing comma.
pub fn host_to_surt(host: &[u8], trailing_comma: bool, reverse_ipaddr: bool) -> (Vec<u8>, Option<u8>) {
    let is_ip = is_dotted_quad(host);
    if is_ip && !reverse_ipaddr {
        return (host.to_vec(), None);
    }

    let mut out = Vec::with_capacity(host.len());
    for (i, label) in host.rsplit(|&b| b == b'.').enumerate() {
        if i > 0 {
            out.push(b',');
        }
        out.extend_from_slice(label);
    }

    let trailer = (trailing_comma && !is_ip).then_some(b',');
    (out, trailer)
}
