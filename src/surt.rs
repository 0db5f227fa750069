//! Top-level entry points.

use crate::canonicalizer::{Canonicalizer, DefaultIaCanonicalizer};
use crate::error::Result;
use crate::format::Format;
use crate::options::{CanonicalizeOptions, FormatOptions, SurtOptions};
use crate::parser::parse;
use crate::url_components::bytes_to_string;

/// Returned in place of a key for empty input
pub const EMPTY_KEY: &str = "-";

/// Inputs that are not URLs and are returned as they are.
const PASSTHROUGH_PREFIXES: [&str; 4] = ["filedesc", "warcinfo", "whois://", "mailto:"];

/// Compute the SURT key of `url` with default options.
///
/// ```
/// assert_eq!(surt::surt("http://www.archive.org/goo/?b&a"), "org,archive)/goo?a&b");
/// assert_eq!(surt::surt("dns:archive.org"), "org,archive)");
/// assert_eq!(surt::surt(""), "-");
/// ```
pub fn surt(url: &str) -> String {
    surt_with(url, &SurtOptions::default(), &DefaultIaCanonicalizer::new())
}

/// Compute the key of `url` with explicit options and canonicalizer.
///
/// Never fails. Input that cannot be parsed, or that yields a SURT key
/// without an authority, is returned unchanged.
pub fn surt_with(url: &str, options: &SurtOptions, canonicalizer: &dyn Canonicalizer) -> String {
    try_surt_with(url, options, canonicalizer).unwrap_or_else(|err| {
        tracing::debug!(url, error = %err, "unparseable url, returning it unchanged");
        url.to_string()
    })
}

/// Like [`surt_with`], but reports input the parser rejects.
///
/// # Errors
///
/// Returns the [`ParseError`](crate::ParseError) for input that cannot be
/// split into components.
pub fn try_surt_with(
    url: &str,
    options: &SurtOptions,
    canonicalizer: &dyn Canonicalizer,
) -> Result<String> {
    if url.is_empty() {
        return Ok(EMPTY_KEY.to_string());
    }
    if PASSTHROUGH_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
    {
        return Ok(url.to_string());
    }

    let mut components = parse(url)?;
    canonicalizer.canonicalize(&mut components, &options.canonicalize);

    if options.format_kind != Format::Surt {
        return Ok(bytes_to_string(
            options.format_kind.format(&components, &options.format),
        ));
    }

    let forced = FormatOptions {
        with_scheme: true,
        ..options.format
    };
    let key = Format::Surt.format(&components, &forced);
    if options.format.with_scheme {
        return Ok(bytes_to_string(key));
    }

    Ok(match memchr::memchr(b'(', &key) {
        Some(paren) => bytes_to_string(key[paren + 1..].to_vec()),
        None => {
            tracing::debug!(url, "key has no authority, returning input unchanged");
            url.to_string()
        }
    })
}

/// Canonicalize `url` with the default rules and render it as a plain URI.
///
/// # Errors
///
/// Returns the [`ParseError`](crate::ParseError) for input that cannot be
/// split into components.
///
/// ```
/// let options = surt::CanonicalizeOptions::default();
/// assert_eq!(
///     surt::canonicalize_url("http://www.alexa.com/", &options).as_deref(),
///     Ok("http://alexa.com/")
/// );
/// ```
pub fn canonicalize_url(url: &str, options: &CanonicalizeOptions) -> Result<String> {
    let mut components = parse(url)?;
    DefaultIaCanonicalizer::new().canonicalize(&mut components, options);
    Ok(components.to_uri_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalizer::Identity;

    #[test]
    fn test_empty_and_passthrough() {
        assert_eq!(surt(""), "-");
        assert_eq!(surt("filedesc:foo.arc.gz"), "filedesc:foo.arc.gz");
        assert_eq!(surt("filedesc://foo.arc.gz"), "filedesc://foo.arc.gz");
        assert_eq!(surt("warcinfo:foo.warc.gz"), "warcinfo:foo.warc.gz");
        assert_eq!(
            surt("whois://whois.isoc.org.il/shaveh.co.il"),
            "whois://whois.isoc.org.il/shaveh.co.il"
        );
        assert_eq!(surt("mailto:foo@example.com"), "mailto:foo@example.com");
    }

    #[test]
    fn test_basic_keys() {
        assert_eq!(surt("http://www.archive.org/"), "org,archive)/");
        assert_eq!(surt("http://archive.org/goo/"), "org,archive)/goo");
        assert_eq!(surt("http://archive.org/goo/?"), "org,archive)/goo");
        assert_eq!(surt("http://archive.org/goo/?a=2&b&a=1"), "org,archive)/goo?a=1&a=2&b");
    }

    #[test]
    fn test_unparseable_input_returned() {
        assert_eq!(surt("http://example.com:99999/"), "http://example.com:99999/");
        assert_eq!(
            try_surt_with(
                "http://example.com:99999/",
                &SurtOptions::default(),
                &DefaultIaCanonicalizer::new()
            ),
            Err(crate::ParseError::InvalidPort)
        );
    }

    #[test]
    fn test_opaque_input_returned() {
        // Parses, but has no host to put in a key
        assert_eq!(surt("urn:isbn:0451450523"), "urn:isbn:0451450523");
    }

    #[test]
    fn test_with_scheme_keeps_opaque_key() {
        let options = SurtOptions::default().with_scheme(true);
        assert_eq!(
            surt_with("urn:isbn:0451450523", &options, &Identity),
            "urn:isbn:0451450523"
        );
    }

    #[test]
    fn test_uri_format() {
        let options = SurtOptions::default().with_format_kind(Format::Uri);
        assert_eq!(
            surt_with("http://www.Example.com/a/?b&a", &options, &DefaultIaCanonicalizer::new()),
            "http://example.com/a?a&b"
        );
    }

    #[test]
    fn test_canonicalize_url() {
        let options = CanonicalizeOptions::default();
        assert_eq!(
            canonicalize_url("http://archive.org/index.html?b=b&a=b", &options).as_deref(),
            Ok("http://archive.org/index.html?a=b&b=b")
        );
        assert!(canonicalize_url("", &options).is_err());
    }
}
