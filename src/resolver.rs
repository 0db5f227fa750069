//! Address resolution for IP-shaped hosts.

use crate::ipv4::parse_ipv4;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

/// Turns an address-shaped host (`017.0.0.1`, `10.0.258`) into an address.
///
/// Implementations must not fail loudly: anything they cannot resolve is
/// reported as `None` and the host is then treated as an ordinary name.
pub trait Resolver {
    fn resolve(&self, candidate: &str) -> Option<Ipv4Addr>;
}

/// Resolves numeric hosts with `inet_aton` rules and no network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericResolver;

impl Resolver for NumericResolver {
    fn resolve(&self, candidate: &str) -> Option<Ipv4Addr> {
        parse_ipv4(candidate).map(Ipv4Addr::from)
    }
}

/// Resolves through the operating system resolver and keeps the first IPv4
/// answer. Blocking; timeouts are whatever the system resolver applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn resolve(&self, candidate: &str) -> Option<Ipv4Addr> {
        let addrs = match (candidate, 0).to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(err) => {
                tracing::debug!(host = candidate, error = %err, "system resolver lookup failed");
                return None;
            }
        };
        addrs
            .map(|addr| addr.ip())
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, candidate: &str) -> Option<Ipv4Addr> {
        (**self).resolve(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_resolver() {
        assert_eq!(
            NumericResolver.resolve("017.0.0.1"),
            Some(Ipv4Addr::new(15, 0, 0, 1))
        );
        assert_eq!(
            NumericResolver.resolve("10.0.258"),
            Some(Ipv4Addr::new(10, 0, 1, 2))
        );
        assert_eq!(NumericResolver.resolve("1.2.3.256"), None);
        assert_eq!(NumericResolver.resolve("example.com"), None);
    }

    #[test]
    fn test_system_resolver_numeric_host() {
        // Literal addresses never reach the network
        assert_eq!(
            SystemResolver.resolve("127.0.0.1"),
            Some(Ipv4Addr::new(127, 0, 0, 1))
        );
    }
}
