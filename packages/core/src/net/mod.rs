//! Network address helpers
//!
//! Parses configured `host:port` strings into [`SocketAddress`] values and
//! turns bind addresses into addresses other machines can connect to.

mod error;
mod resolver;

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub use error::AddressError;
pub use resolver::{HostResolver, SystemResolver};

#[cfg(test)]
pub(crate) use resolver::testing;

use resolver::strip_brackets;

/// A host name and port, plus the address the host resolved to
///
/// `ip` is None when the host name could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketAddress {
    host: String,
    port: u16,
    ip: Option<IpAddr>,
}

impl SocketAddress {
    pub fn new(host: impl Into<String>, port: u16, ip: Option<IpAddr>) -> Self {
        Self {
            host: host.into(),
            port,
            ip,
        }
    }

    /// Host name as configured (IPv6 literals without brackets)
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    pub fn is_unresolved(&self) -> bool {
        self.ip.is_none()
    }

    /// True for 0.0.0.0 and ::
    pub fn is_wildcard(&self) -> bool {
        self.ip.is_some_and(|ip| ip.is_unspecified())
    }

    pub fn is_loopback(&self) -> bool {
        self.ip.is_some_and(|ip| ip.is_loopback())
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&host_and_port(&self.host, self.port))
    }
}

/// Join a host and port with a colon, bracketing IPv6 literals
pub fn host_and_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Parse an address string into a [`SocketAddress`]
///
/// Accepts `host`, `host:port`, `[v6]:port` and `scheme://host:port/path`.
/// `default_port` is used when the target carries no port. The host is
/// looked up with `resolver`; a failed lookup leaves the address
/// unresolved rather than failing.
pub fn create_socket_addr(
    target: &str,
    default_port: Option<u16>,
    resolver: &dyn HostResolver,
) -> Result<SocketAddress, AddressError> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty);
    }

    // Drop any scheme and path, keeping only the authority
    let rest = match trimmed.find("://") {
        Some(idx) => &trimmed[idx + 3..],
        None => trimmed,
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();

    let (host, port) = split_host_port(authority)
        .ok_or_else(|| AddressError::InvalidAuthority(target.to_string()))?;

    // A trailing ':' with nothing after it counts as no port
    let port = match port.filter(|p| !p.is_empty()) {
        Some(p) => p.parse::<u16>().map_err(|_| AddressError::InvalidPort {
            target: target.to_string(),
            port: p.to_string(),
        })?,
        None => default_port.ok_or_else(|| AddressError::MissingPort(target.to_string()))?,
    };

    let ip = resolver.lookup(host);
    if ip.is_none() {
        tracing::debug!("Address {host}:{port} is unresolved");
    }

    Ok(SocketAddress::new(host, port, ip))
}

/// Split an authority into host and optional port text
///
/// Returns None when no host is present.
fn split_host_port(authority: &str) -> Option<(&str, Option<&str>)> {
    let (host, port) = if authority.starts_with('[') {
        let end = authority.find(']')?;
        let host = strip_brackets(&authority[..=end]);
        let remainder = &authority[end + 1..];
        let port = match remainder {
            "" => None,
            r => Some(r.strip_prefix(':')?),
        };
        (host, port)
    } else if authority.matches(':').count() > 1 {
        // Bare IPv6 literal, no port
        authority.parse::<Ipv6Addr>().ok()?;
        (authority, None)
    } else {
        match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    if host.is_empty() {
        None
    } else {
        Some((host, port))
    }
}

/// Turn a bind address into one that can be connected to
///
/// A wildcard address is replaced by the local host, keeping the port.
/// If the local host name cannot be determined or resolved, the loopback
/// address is used instead. Other addresses are returned unchanged.
pub fn get_connect_address(addr: &SocketAddress, resolver: &dyn HostResolver) -> SocketAddress {
    if !addr.is_wildcard() {
        return addr.clone();
    }

    let local = resolver
        .local_host_name()
        .ok()
        .and_then(|name| resolver.lookup(&name).map(|ip| (name, ip)));

    match local {
        Some((name, ip)) => SocketAddress::new(name, addr.port(), Some(ip)),
        None => {
            tracing::debug!("Local host unknown, connecting to loopback instead");
            SocketAddress::new(
                Ipv4Addr::LOCALHOST.to_string(),
                addr.port(),
                Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            )
        }
    }
}

/// Format an address as `host:port` for use by remote clients
///
/// Unresolved, wildcard and loopback addresses are reported with the local
/// machine's canonical host name. If that lookup fails the address's own
/// host name is kept. Any other address keeps its configured host name.
pub fn resolved_host_and_port(addr: &SocketAddress, resolver: &dyn HostResolver) -> String {
    let addr = get_connect_address(addr, resolver);

    let needs_local_name = addr.is_unresolved() || addr.is_wildcard() || addr.is_loopback();
    let host = if needs_local_name {
        match resolver.local_canonical_hostname() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("Ignoring local host lookup failure: {e}");
                addr.host().to_string()
            }
        }
    } else {
        addr.host().to_string()
    };

    host_and_port(&host, addr.port())
}

#[cfg(test)]
mod tests {
    use super::testing::FixedResolver;
    use super::*;

    fn resolver() -> FixedResolver {
        FixedResolver::new(Some("node1.example.com")).with_host("rm.example.com", "10.1.2.3")
    }

    #[test]
    fn create_socket_addr_parses_host_and_port() {
        let addr = create_socket_addr("rm.example.com:8088", None, &resolver()).unwrap();
        assert_eq!(addr.host(), "rm.example.com");
        assert_eq!(addr.port(), 8088);
        assert_eq!(addr.ip(), Some("10.1.2.3".parse().unwrap()));
    }

    #[test]
    fn create_socket_addr_uses_default_port() {
        let addr = create_socket_addr("rm.example.com", Some(8090), &resolver()).unwrap();
        assert_eq!(addr.port(), 8090);
    }

    #[test]
    fn create_socket_addr_strips_scheme_and_path() {
        let addr = create_socket_addr("http://rm.example.com:8088/cluster", None, &resolver())
            .unwrap();
        assert_eq!(addr.host(), "rm.example.com");
        assert_eq!(addr.port(), 8088);
    }

    #[test]
    fn create_socket_addr_handles_bracketed_ipv6() {
        let addr = create_socket_addr("[::1]:8088", None, &resolver()).unwrap();
        assert_eq!(addr.host(), "::1");
        assert!(addr.is_loopback());
        assert_eq!(addr.to_string(), "[::1]:8088");
    }

    #[test]
    fn create_socket_addr_handles_bare_ipv6_with_default_port() {
        let addr = create_socket_addr("::", Some(8088), &resolver()).unwrap();
        assert!(addr.is_wildcard());
    }

    #[test]
    fn create_socket_addr_keeps_unknown_host_unresolved() {
        let addr = create_socket_addr("nowhere.invalid:80", None, &resolver()).unwrap();
        assert!(addr.is_unresolved());
        assert_eq!(addr.to_string(), "nowhere.invalid:80");
    }

    #[test]
    fn create_socket_addr_rejects_empty() {
        assert_eq!(
            create_socket_addr("  ", Some(80), &resolver()),
            Err(AddressError::Empty)
        );
    }

    #[test]
    fn create_socket_addr_rejects_missing_host() {
        assert!(matches!(
            create_socket_addr(":8088", None, &resolver()),
            Err(AddressError::InvalidAuthority(_))
        ));
        assert!(matches!(
            create_socket_addr("http://", Some(80), &resolver()),
            Err(AddressError::InvalidAuthority(_))
        ));
    }

    #[test]
    fn create_socket_addr_rejects_bad_port() {
        assert!(matches!(
            create_socket_addr("rm.example.com:http", None, &resolver()),
            Err(AddressError::InvalidPort { .. })
        ));
        assert!(matches!(
            create_socket_addr("rm.example.com:70000", None, &resolver()),
            Err(AddressError::InvalidPort { .. })
        ));
    }

    #[test]
    fn create_socket_addr_requires_some_port() {
        assert!(matches!(
            create_socket_addr("rm.example.com", None, &resolver()),
            Err(AddressError::MissingPort(_))
        ));
    }

    #[test]
    fn create_socket_addr_treats_empty_port_as_absent() {
        let addr = create_socket_addr("rm.example.com:", Some(8088), &resolver()).unwrap();
        assert_eq!(addr.to_string(), "rm.example.com:8088");

        let addr = create_socket_addr("[::1]:", Some(8090), &resolver()).unwrap();
        assert_eq!(addr.to_string(), "[::1]:8090");

        assert_eq!(
            create_socket_addr("rm.example.com:", None, &resolver()),
            Err(AddressError::MissingPort("rm.example.com:".to_string()))
        );
    }

    #[test]
    fn get_connect_address_replaces_wildcard_with_local_host() {
        let addr = create_socket_addr("0.0.0.0:8088", None, &resolver()).unwrap();
        let connect = get_connect_address(&addr, &resolver());
        assert_eq!(connect.host(), "node1.example.com");
        assert_eq!(connect.port(), 8088);
    }

    #[test]
    fn get_connect_address_falls_back_to_loopback() {
        let resolver = FixedResolver::new(None);
        let addr = create_socket_addr("0.0.0.0:8088", None, &resolver).unwrap();
        let connect = get_connect_address(&addr, &resolver);
        assert_eq!(connect.host(), "127.0.0.1");
        assert!(connect.is_loopback());
    }

    #[test]
    fn get_connect_address_keeps_specific_address() {
        let addr = create_socket_addr("rm.example.com:8088", None, &resolver()).unwrap();
        assert_eq!(get_connect_address(&addr, &resolver()), addr);
    }

    #[test]
    fn resolved_keeps_configured_host_for_remote_address() {
        let addr = create_socket_addr("rm.example.com:8088", None, &resolver()).unwrap();
        assert_eq!(
            resolved_host_and_port(&addr, &resolver()),
            "rm.example.com:8088"
        );
    }

    #[test]
    fn resolved_uses_local_name_for_wildcard_and_loopback() {
        for target in ["0.0.0.0:8088", "127.0.0.1:8088", "[::1]:8088"] {
            let addr = create_socket_addr(target, None, &resolver()).unwrap();
            assert_eq!(
                resolved_host_and_port(&addr, &resolver()),
                "node1.example.com:8088",
                "target {target}"
            );
        }
    }

    #[test]
    fn resolved_reports_fully_qualified_local_name() {
        let resolver =
            FixedResolver::new(Some("node1")).with_canonical("node1", "node1.example.com");
        let addr = create_socket_addr("0.0.0.0:8088", None, &resolver).unwrap();
        assert_eq!(
            resolved_host_and_port(&addr, &resolver),
            "node1.example.com:8088"
        );
    }

    #[test]
    fn resolved_uses_local_name_for_unresolved_host() {
        let addr = create_socket_addr("nowhere.invalid:8088", None, &resolver()).unwrap();
        assert_eq!(
            resolved_host_and_port(&addr, &resolver()),
            "node1.example.com:8088"
        );
    }

    #[test]
    fn resolved_falls_back_when_local_lookup_fails() {
        let resolver = FixedResolver::new(None);
        let addr = create_socket_addr("127.0.0.1:8088", None, &resolver).unwrap();
        assert_eq!(resolved_host_and_port(&addr, &resolver), "127.0.0.1:8088");

        let addr = create_socket_addr("0.0.0.0:8090", None, &resolver).unwrap();
        assert_eq!(resolved_host_and_port(&addr, &resolver), "127.0.0.1:8090");
    }

    #[test]
    fn host_and_port_brackets_ipv6() {
        assert_eq!(host_and_port("example.com", 80), "example.com:80");
        assert_eq!(host_and_port("fe80::1", 80), "[fe80::1]:80");
    }
}
