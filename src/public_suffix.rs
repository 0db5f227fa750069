//! Registered-domain lookup backed by the Public Suffix List.

use crate::checkers::is_dotted_quad;
use psl::{List, Psl};

/// A host split at its registered domain.
///
/// `www.images.amazon.co.uk` splits into `amazon.co.uk` and `www.images`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixSplit {
    pub registered_domain: String,
    pub subdomain: String,
}

/// Splits hosts into registered domain and subdomain.
pub trait SuffixLookup {
    /// Returns `None` when the host has no registered domain (bare public
    /// suffixes, IP addresses, malformed names).
    fn split(&self, host: &str) -> Option<SuffixSplit>;
}

/// Lookup using the list compiled into the `psl` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslLookup;

impl SuffixLookup for PslLookup {
    fn split(&self, host: &str) -> Option<SuffixSplit> {
        let host = host.strip_suffix('.').unwrap_or(host);
        if host.is_empty() || is_dotted_quad(host.as_bytes()) {
            return None;
        }

        let lowered = host.to_ascii_lowercase();
        let domain = List.domain(lowered.as_bytes())?;
        let registered = core::str::from_utf8(domain.as_bytes()).ok()?;

        // The registered domain is a suffix of the lowered host; the rest,
        // minus the joining dot, is the subdomain.
        let prefix_len = lowered.len() - registered.len();
        let subdomain = host[..prefix_len].strip_suffix('.').unwrap_or("");

        Some(SuffixSplit {
            registered_domain: registered.to_string(),
            subdomain: subdomain.to_string(),
        })
    }
}

impl<L: SuffixLookup + ?Sized> SuffixLookup for &L {
    fn split(&self, host: &str) -> Option<SuffixSplit> {
        (**self).split(host)
    }
}
