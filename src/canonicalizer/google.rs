use super::Canonicalizer;
use crate::host::normalize_host;
use crate::options::CanonicalizeOptions;
use crate::path::normalize_path;
use crate::resolver::{NumericResolver, Resolver};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{escape_once, minimal_escape, unescape_repeatedly};
use crate::url_components::UrlComponents;

/// Canonicalization rules of the Safe Browsing API.
///
/// Drops the fragment, reduces escaping to a single canonical level,
/// normalizes the host (IDNA, dot runs, numeric addresses, case) and
/// resolves dot segments in hierarchical paths. Takes no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleCanonicalizer<R = NumericResolver> {
    resolver: R,
}

impl GoogleCanonicalizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Resolver> GoogleCanonicalizer<R> {
    /// Use `resolver` for address-shaped hosts such as `017.0.0.1`
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }
}

impl<R: Resolver> Canonicalizer for GoogleCanonicalizer<R> {
    fn canonicalize(&self, url: &mut UrlComponents, _options: &CanonicalizeOptions) {
        url.fragment = None;

        for field in [&mut url.auth_user, &mut url.auth_pass, &mut url.query] {
            if let Some(value) = field.as_mut().filter(|value| !value.is_empty()) {
                *value = minimal_escape(value);
            }
        }

        if let Some(host) = url.host.take().filter(|host| !host.is_empty()) {
            url.host = normalize_host(&host, &self.resolver);
        }

        let path = url.path.as_deref().map(unescape_repeatedly);
        // Opaque payloads (mailto:, dns:) are not directory paths
        let path = if url.has_host() && url.scheme_type() != SchemeType::Dns {
            Some(normalize_path(path.as_deref().unwrap_or_default()))
        } else {
            path
        };
        url.path = path.map(|path| escape_once(&path));
    }
}
