use crate::checkers::parse_port;
use crate::error::{ParseError, Result};

/// The pieces of an authority (`user:pass@host:port`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority {
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Split an authority section.
///
/// - userinfo is everything before the last `@`; the password follows the
///   first `:` inside it
/// - trailing `:` characters with no port digits are dropped
/// - bracketed hosts keep their brackets; unbalanced brackets are an error
/// - the host is lowercased; an empty host is recorded as absent
/// - port `0` is recorded as unset
pub fn parse_authority(netloc: &str) -> Result<Authority> {
    let (userinfo, hostport) = match netloc.rfind('@') {
        Some(at) => (Some(&netloc[..at]), &netloc[at + 1..]),
        None => (None, netloc),
    };

    let (user, pass) = match userinfo {
        Some(info) => match info.split_once(':') {
            Some((user, pass)) => (Some(user.to_string()), Some(pass.to_string())),
            None => (Some(info.to_string()), None),
        },
        None => (None, None),
    };

    let hostport = hostport.trim_end_matches(':');
    let (host, port) = split_host_port(hostport)?;

    let port = match port {
        None | Some("") => None,
        Some(digits) => Some(parse_port(digits.as_bytes()).ok_or(ParseError::InvalidPort)?),
    }
    .filter(|&port| port != 0);

    let host = (!host.is_empty()).then(|| host.to_lowercase());

    Ok(Authority {
        user,
        pass,
        host,
        port,
    })
}

/// Parse host string into hostname and optional port parts.
fn split_host_port(hostport: &str) -> Result<(&str, Option<&str>)> {
    if hostport.starts_with('[') {
        let bracket_end = hostport.find(']').ok_or(ParseError::InvalidIpv6)?;
        let host = &hostport[..=bracket_end];
        let port = hostport[bracket_end + 1..].strip_prefix(':');
        return Ok((host, port));
    }

    if hostport.contains(']') {
        return Err(ParseError::InvalidIpv6);
    }

    Ok(match hostport.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (hostport, None),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_host() {
        let authority = parse_authority("www.GOOgle.com").unwrap();
        assert_eq!(authority.host.as_deref(), Some("www.google.com"));
        assert_eq!(authority.port, None);
        assert_eq!(authority.user, None);
    }

    #[test]
    fn test_userinfo_and_port() {
        let authority = parse_authority("user:p@ss@example.com:8080").unwrap();
        assert_eq!(authority.user.as_deref(), Some("user"));
        assert_eq!(authority.pass.as_deref(), Some("p@ss"));
        assert_eq!(authority.host.as_deref(), Some("example.com"));
        assert_eq!(authority.port, Some(8080));
    }

    #[test]
    fn test_trailing_colon_without_port() {
        let authority = parse_authority("mineral.galleries.com:").unwrap();
        assert_eq!(authority.host.as_deref(), Some("mineral.galleries.com"));
        assert_eq!(authority.port, None);
    }

    #[test]
    fn test_port_zero_is_unset() {
        assert_eq!(parse_authority("example.com:0").unwrap().port, None);
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(parse_authority("example.com:http"), Err(ParseError::InvalidPort));
        assert_eq!(parse_authority("example.com:65536"), Err(ParseError::InvalidPort));
    }

    #[test]
    fn test_bracketed_host() {
        let authority = parse_authority("[2001:DB8::1]:443").unwrap();
        assert_eq!(authority.host.as_deref(), Some("[2001:db8::1]"));
        assert_eq!(authority.port, Some(443));

        assert_eq!(parse_authority("[::1"), Err(ParseError::InvalidIpv6));
        assert_eq!(parse_authority("::1]"), Err(ParseError::InvalidIpv6));
    }

    #[test]
    fn test_empty_host() {
        assert_eq!(parse_authority("").unwrap().host, None);
    }
}
