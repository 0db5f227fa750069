//! Key and URI formatters.

use crate::host::host_to_surt;
use crate::options::FormatOptions;
use crate::public_suffix::{PslLookup, SuffixLookup};
use crate::types::SchemeType;
use crate::url_components::{UrlComponents, bytes_to_string};
use std::borrow::Cow;

/// Output layout for a canonicalized URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `scheme://(org,archive,www,)/path?query`
    #[default]
    Surt,
    /// Plain URI
    Uri,
    /// `org,archive,www,//port:scheme:@user:pass:/path?query`.
    /// Experimental; the layout may change.
    Ssurt,
}

impl Format {
    /// Render `url` using the compiled-in Public Suffix List.
    pub fn format(self, url: &UrlComponents, options: &FormatOptions) -> Vec<u8> {
        self.format_with(url, options, &PslLookup)
    }

    /// Render `url`, consulting `suffixes` when `options.public_suffix` is
    /// set.
    pub fn format_with(
        self,
        url: &UrlComponents,
        options: &FormatOptions,
        suffixes: &dyn SuffixLookup,
    ) -> Vec<u8> {
        let url = if options.public_suffix {
            registered_domain_only(url, suffixes)
        } else {
            Cow::Borrowed(url)
        };

        match self {
            Self::Surt => surt_bytes(&url, options),
            Self::Uri => url.to_uri_bytes(),
            Self::Ssurt => ssurt_bytes(&url, options),
        }
    }

    /// Render `url` as text
    pub fn format_string(self, url: &UrlComponents, options: &FormatOptions) -> String {
        bytes_to_string(self.format(url, options))
    }
}

/// Replace the host with its registered domain, keeping it when the list
/// has no answer.
fn registered_domain_only<'a>(
    url: &'a UrlComponents,
    suffixes: &dyn SuffixLookup,
) -> Cow<'a, UrlComponents> {
    let registered = url
        .host
        .as_deref()
        .and_then(|host| core::str::from_utf8(host).ok())
        .and_then(|host| suffixes.split(host));

    match registered {
        Some(split) => {
            let mut owned = url.clone();
            owned.host = Some(split.registered_domain.into_bytes());
            Cow::Owned(owned)
        }
        None => {
            tracing::trace!("no registered domain, keeping host");
            Cow::Borrowed(url)
        }
    }
}

/// Write the traditional SURT key.
///
/// Without `with_scheme` the scheme is only written for URLs that have no
/// host (`mailto:`, `urn:`).
pub fn surt_bytes(url: &UrlComponents, options: &FormatOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    let host = url.host.as_deref().filter(|host| !host.is_empty());

    if options.with_scheme {
        out.extend_from_slice(&url.scheme);
        out.push(b':');
        if host.is_some() {
            if url.scheme_type() != SchemeType::Dns {
                out.extend_from_slice(b"//");
            }
            out.push(b'(');
        }
    } else if host.is_none() {
        out.extend_from_slice(&url.scheme);
        out.push(b':');
    }

    if let Some(host) = host {
        write_surt_userinfo(url, &mut out);
        let (reversed, trailer) = host_to_surt(host, options.trailing_comma, options.reverse_ipaddr);
        out.extend_from_slice(&reversed);
        url.write_port(&mut out);
        if let Some(trailer) = trailer {
            out.push(trailer);
        }
        out.push(b')');
    }

    url.write_path_onwards(&mut out);
    out
}

/// Userinfo in a SURT key is `user[pass]@`, with no separator.
fn write_surt_userinfo(url: &UrlComponents, out: &mut Vec<u8>) {
    if let Some(user) = url.auth_user.as_deref().filter(|user| !user.is_empty()) {
        out.extend_from_slice(user);
        if let Some(pass) = url.auth_pass.as_deref() {
            out.extend_from_slice(pass);
        }
        out.push(b'@');
    }
}

/// Write the experimental SSURT key: the host comes first, then the port
/// and scheme, then userinfo, then the rest of the URL.
///
/// Follows the urlcanon `ssurt` layout, which puts the port after `//`.
pub fn ssurt_bytes(url: &UrlComponents, options: &FormatOptions) -> Vec<u8> {
    let Some(host) = url.host.as_deref().filter(|host| !host.is_empty()) else {
        return url.to_uri_bytes();
    };

    let mut out = Vec::with_capacity(64);
    let (reversed, trailer) = host_to_surt(host, true, options.reverse_ipaddr);
    out.extend_from_slice(&reversed);
    if let Some(trailer) = trailer {
        out.push(trailer);
    }
    out.extend_from_slice(b"//");
    if let Some(port) = url.port {
        out.extend_from_slice(port.to_string().as_bytes());
    }
    out.push(b':');
    out.extend_from_slice(&url.scheme);
    if let Some(user) = url.auth_user.as_deref().filter(|user| !user.is_empty()) {
        out.push(b':');
        out.push(b'@');
        out.extend_from_slice(user);
        if let Some(pass) = url.auth_pass.as_deref().filter(|pass| !pass.is_empty()) {
            out.push(b':');
            out.extend_from_slice(pass);
        }
    }
    out.push(b':');
    url.write_path_onwards(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::public_suffix::SuffixSplit;

    fn url(scheme: &str, host: &str, path: &str) -> UrlComponents {
        let mut url = UrlComponents::with_host(scheme, host);
        url.path = Some(path.as_bytes().to_vec());
        url
    }

    fn surt(url: &UrlComponents, options: FormatOptions) -> String {
        bytes_to_string(Format::Surt.format(url, &options))
    }

    #[test]
    fn test_surt_plain() {
        let url = url("http", "www.archive.org", "/goo");
        assert_eq!(surt(&url, FormatOptions::default()), "org,archive,www)/goo");
        assert_eq!(
            surt(&url, FormatOptions::default().with_scheme(true)),
            "http://(org,archive,www)/goo"
        );
        assert_eq!(
            surt(&url, FormatOptions::default().with_scheme(true).with_trailing_comma(true)),
            "http://(org,archive,www,)/goo"
        );
    }

    #[test]
    fn test_surt_port_and_userinfo() {
        let mut url = url("http", "archive.org", "/");
        url.port = Some(8080);
        url.auth_user = Some(b"user".to_vec());
        url.auth_pass = Some(b"pass".to_vec());
        assert_eq!(
            surt(&url, FormatOptions::default().with_trailing_comma(true)),
            "userpass@org,archive:8080,)/"
        );

        url.auth_pass = None;
        assert_eq!(surt(&url, FormatOptions::default()), "user@org,archive:8080)/");
    }

    #[test]
    fn test_surt_opaque() {
        let mut url = UrlComponents::new();
        url.scheme = b"mailto".to_vec();
        url.path = Some(b"bot@archive.org".to_vec());
        assert_eq!(surt(&url, FormatOptions::default()), "mailto:bot@archive.org");
        assert_eq!(
            surt(&url, FormatOptions::default().with_scheme(true)),
            "mailto:bot@archive.org"
        );
    }

    #[test]
    fn test_surt_dns() {
        let url = UrlComponents::with_host("dns", "archive.org");
        assert_eq!(surt(&url, FormatOptions::default()), "org,archive)");
        assert_eq!(surt(&url, FormatOptions::default().with_scheme(true)), "dns:(org,archive)");
    }

    #[test]
    fn test_surt_ip() {
        let url = url("http", "127.2.34.5", "/foo");
        assert_eq!(
            surt(&url, FormatOptions::default().with_trailing_comma(true)),
            "127.2.34.5)/foo"
        );
        assert_eq!(
            surt(&url, FormatOptions::default().with_reverse_ipaddr(true)),
            "5,34,2,127)/foo"
        );
    }

    #[test]
    fn test_public_suffix() {
        let options = FormatOptions::default().with_public_suffix(true);
        let images = url("http", "www.images.amazon.co.uk", "/");
        assert_eq!(surt(&images, options), "uk,co,amazon)/");

        let bare_suffix = url("http", "co.uk", "/");
        assert_eq!(surt(&bare_suffix, options), "uk,co)/");
    }

    #[test]
    fn test_custom_suffix_lookup() {
        struct Fixed;
        impl SuffixLookup for Fixed {
            fn split(&self, _host: &str) -> Option<SuffixSplit> {
                Some(SuffixSplit {
                    registered_domain: "example.net".to_string(),
                    subdomain: String::new(),
                })
            }
        }

        let url = url("http", "a.b.c", "/");
        let options = FormatOptions::default().with_public_suffix(true);
        assert_eq!(Format::Surt.format_with(&url, &options, &Fixed), b"net,example)/");
        assert_eq!(Format::Uri.format_with(&url, &options, &Fixed), b"http://example.net/");
    }

    #[test]
    fn test_uri_format() {
        let url = url("https", "archive.org", "/a");
        assert_eq!(
            Format::Uri.format_string(&url, &FormatOptions::default()),
            "https://archive.org/a"
        );
    }

    #[test]
    fn test_ssurt() {
        let mut url = url("http", "www.archive.org", "/foo");
        url.query = Some(b"a=b".to_vec());
        let options = FormatOptions::default();
        assert_eq!(
            Format::Ssurt.format_string(&url, &options),
            "org,archive,www,//:http:/foo?a=b"
        );

        url.port = Some(8080);
        url.auth_user = Some(b"user".to_vec());
        assert_eq!(
            Format::Ssurt.format_string(&url, &options),
            "org,archive,www,//8080:http:@user:/foo?a=b"
        );
    }
}
