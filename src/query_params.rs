use regex::bytes::Regex;
use std::sync::LazyLock;

/// Session parameters dropped from queries, tried in order.
///
/// Each pattern captures the text before the parameter and the text after
/// the `&` that follows it. A parameter at the end of the query leaves the
/// preceding `&` in place: `one=two&jsessionid=...` becomes `one=two&`.
#[allow(clippy::unwrap_used)]
static QUERY_SESSION_IDS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i-u)^(.*)(?:jsessionid=[0-9a-z]{32})(?:&(.*))?$").unwrap(),
        Regex::new(r"(?i-u)^(.*)(?:phpsessid=[0-9a-z]{32})(?:&(.*))?$").unwrap(),
        Regex::new(r"(?i-u)^(.*)(?:sid=[0-9a-z]{32})(?:&(.*))?$").unwrap(),
        Regex::new(r"(?i-u)^(.*)(?:aspsessionid[a-z]{8}=[a-z]{24})(?:&(.*))?$").unwrap(),
        Regex::new(r"(?i-u)^(.*)(?:cfid=[^&]+&cftoken=[^&]+)(?:&(.*))?$").unwrap(),
    ]
});

/// A query string split into `key` / `key=value` entries.
///
/// Entries borrow from the query they were parsed from. Empty entries
/// (from `a=1&` or `&&`) are kept so that serialization is lossless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams<'a> {
    params: Vec<(&'a [u8], Option<&'a [u8]>)>,
}

impl<'a> QueryParams<'a> {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Split on `&`, then split each entry at its first `=`.
    /// An entry without `=` has no value, which is distinct from `key=`.
    pub fn parse(query: &'a [u8]) -> Self {
        let params = query
            .split(|&b| b == b'&')
            .map(|pair| match memchr::memchr(b'=', pair) {
                Some(eq) => (&pair[..eq], Some(&pair[eq + 1..])),
                None => (pair, None),
            })
            .collect();

        Self { params }
    }

    /// Get the value of the first entry with `key`.
    /// Returns `Some(None)` for a valueless entry.
    pub fn get(&self, key: &[u8]) -> Option<Option<&'a [u8]>> {
        self.params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Sort entries by key, then by value. Valueless entries come before
    /// any `key=value` entry with the same key. Equal entries keep their
    /// relative order.
    pub fn sort(&mut self) {
        self.params.sort();
    }

    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], Option<&'a [u8]>)> + '_ {
        self.params.iter().copied()
    }

    /// Join entries back into a query string, without a leading `?`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                out.push(b'&');
            }
            out.extend_from_slice(key);
            if let Some(value) = value {
                out.push(b'=');
                out.extend_from_slice(value);
            }
        }
        out
    }
}

impl<'a> From<&'a [u8]> for QueryParams<'a> {
    fn from(query: &'a [u8]) -> Self {
        Self::parse(query)
    }
}

/// Sort query entries alphabetically.
///
/// `a=2&b&a=1` becomes `a=1&a=2&b`. Queries of zero or one byte are
/// returned unchanged.
pub fn alpha_reorder_query(query: &[u8]) -> Vec<u8> {
    if query.len() <= 1 {
        return query.to_vec();
    }
    let mut params = QueryParams::parse(query);
    params.sort();
    params.serialize()
}

/// Remove well-known session parameters (`jsessionid`, `phpsessid`, `sid`,
/// `ASPSESSIONID*`, `CFID`/`CFTOKEN`).
pub fn strip_query_session_id(query: &[u8]) -> Vec<u8> {
    let mut query = query.to_vec();
    for pattern in QUERY_SESSION_IDS.iter() {
        let stripped = pattern.captures(&query).map(|caps| {
            let mut stripped = caps.get(1).map_or_else(Vec::new, |m| m.as_bytes().to_vec());
            if let Some(rest) = caps.get(2) {
                stripped.extend_from_slice(rest.as_bytes());
            }
            stripped
        });
        if let Some(stripped) = stripped {
            query = stripped;
        }
    }
    query
}
