//! Host name resolution
//!
//! [`HostResolver`] is the seam between address formatting and the
//! machine's name service, so callers (and tests) can control lookups.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

/// Name resolution used by the address helpers
pub trait HostResolver {
    /// Resolve a host name or IP literal to an address
    ///
    /// Returns None when the name cannot be resolved.
    fn lookup(&self, host: &str) -> Option<IpAddr>;

    /// Reverse-resolve an address to its fully qualified name
    fn canonical_name(&self, ip: IpAddr) -> Option<String>;

    /// The local machine's host name
    fn local_host_name(&self) -> io::Result<String>;

    /// The local machine's canonical host name
    ///
    /// The local name is resolved and its address mapped back to a fully
    /// qualified name. Fails when the local host name is unknown to the name
    /// service; falls back to the plain name when the reverse lookup fails.
    fn local_canonical_hostname(&self) -> io::Result<String> {
        let name = self.local_host_name()?;
        let Some(ip) = self.lookup(&name) else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Unknown local host: {name}"),
            ));
        };
        match self.canonical_name(ip) {
            Some(canonical) => Ok(canonical),
            None => {
                tracing::debug!("No canonical name for {name} ({ip})");
                Ok(name)
            }
        }
    }
}

/// Resolver backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn lookup(&self, host: &str) -> Option<IpAddr> {
        let host = strip_brackets(host);
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Some(ip);
        }

        match (host, 0).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().map(|a| a.ip()),
            Err(e) => {
                tracing::debug!("Could not resolve host {host}: {e}");
                None
            }
        }
    }

    fn canonical_name(&self, ip: IpAddr) -> Option<String> {
        match dns_lookup::lookup_addr(&ip) {
            // getnameinfo hands back the numeric form when no name is found
            Ok(name) if name.parse::<IpAddr>().is_err() => Some(name),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Reverse lookup of {ip} failed: {e}");
                None
            }
        }
    }

    fn local_host_name(&self) -> io::Result<String> {
        whoami::fallible::hostname()
    }
}

/// Strip surrounding brackets from an IPv6 literal like "[::1]"
pub(crate) fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
