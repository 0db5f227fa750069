//! Lenient URL splitting.
//!
//! Inputs come from crawl logs spanning decades of malformed producers, so
//! the parser repairs what it can (missing scheme, repeated protocols,
//! slash runs in place of an authority) and only rejects what cannot be
//! represented at all.

pub mod authority;

pub use authority::{Authority, parse_authority};

use crate::error::{ParseError, Result};
use crate::helpers::{
    clean_tabs_and_newlines, collapse_repeated_protocols, prune_fragment, split_query,
};
use crate::scheme::{get_scheme_type, scheme_prefix_len};
use crate::types::SchemeType;
use crate::url_components::UrlComponents;
use std::borrow::Cow;

/// Split `input` into [`UrlComponents`].
///
/// Empty query and fragment sections are recorded as absent; a bare
/// trailing `?` is remembered in `last_delimiter` instead.
pub fn parse(input: &str) -> Result<UrlComponents> {
    let cleaned = clean_tabs_and_newlines(input);
    if cleaned.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let with_scheme = if scheme_prefix_len(cleaned.as_bytes()).is_some() {
        cleaned
    } else {
        Cow::Owned(format!("http://{cleaned}"))
    };
    let url = collapse_repeated_protocols(&with_scheme);

    let scheme_len = scheme_prefix_len(url.as_bytes()).ok_or(ParseError::InvalidScheme)?;
    let scheme = url[..scheme_len].to_ascii_lowercase();
    let scheme_type = get_scheme_type(scheme.as_bytes());

    let (rest, fragment) = prune_fragment(&url[scheme_len + 1..]);
    let (rest, query) = split_query(rest);

    let (netloc, path) = match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(slash) => (Some(&after[..slash]), &after[slash..]),
            None => (Some(after), ""),
        },
        None => (None, rest),
    };

    let mut authority = netloc.map(parse_authority).transpose()?.unwrap_or_default();
    let mut path = (!path.is_empty()).then(|| path.to_string());

    if authority.host.is_none() {
        if scheme_type == SchemeType::Dns {
            // dns:archive.org carries the host where a path would be
            authority.host = path.take();
        } else if scheme.starts_with("http") {
            if let Some(raw_path) = path.take() {
                // http:////www.vikings.com
                let trimmed = raw_path.trim_start_matches('/');
                let (host_part, remainder) = trimmed.split_once('/').unwrap_or((trimmed, ""));
                let promoted = parse_authority(host_part)?;
                authority.host = promoted.host;
                authority.port = promoted.port;
                path = Some(format!("/{remainder}"));
            }
        }
    }

    let last_delimiter = (query == Some("") && fragment.is_none()).then_some(b'?');

    Ok(UrlComponents {
        scheme: scheme.into_bytes(),
        auth_user: authority.user.map(String::into_bytes),
        auth_pass: authority.pass.map(String::into_bytes),
        host: authority.host.map(String::into_bytes),
        port: authority.port,
        path: path.map(String::into_bytes),
        query: non_empty(query),
        fragment: non_empty(fragment),
        last_delimiter,
    })
}

fn non_empty(section: Option<&str>) -> Option<Vec<u8>> {
    section
        .filter(|section| !section.is_empty())
        .map(|section| section.as_bytes().to_vec())
}

impl UrlComponents {
    /// Parse a raw URL. See [`parse`].
    pub fn parse(input: &str) -> Result<Self> {
        parse(input)
    }
}
