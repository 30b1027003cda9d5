//! Web UI address helpers for the resource manager and node managers
//!
//! Every function reads the HTTP policy from the configuration it is given
//! (or takes it explicitly in the `_with_policy` forms), then picks the
//! HTTP or HTTPS address key accordingly. Functions that resolve addresses
//! have a `_using` form taking a [`HostResolver`]; the plain form uses the
//! system resolver.

use crate::config::Configuration;
use crate::config::keys::{
    DEFAULT_NM_WEBAPP_ADDRESS, DEFAULT_NM_WEBAPP_HTTPS_ADDRESS, DEFAULT_RM_WEBAPP_ADDRESS,
    DEFAULT_RM_WEBAPP_HTTPS_ADDRESS, DEFAULT_RM_WEBAPP_HTTPS_PORT, DEFAULT_RM_WEBAPP_PORT,
    NM_WEBAPP_ADDRESS, NM_WEBAPP_HTTPS_ADDRESS, PROXY_ADDRESS, RM_WEBAPP_ADDRESS,
    RM_WEBAPP_HTTPS_ADDRESS,
};
use crate::ha::{is_ha_enabled, rm_ha_webapp_addresses};
use crate::http::HttpPolicy;
use crate::net::{
    AddressError, HostResolver, SystemResolver, create_socket_addr, resolved_host_and_port,
};

/// Address key, default address and default port for one web UI
struct WebAppKey {
    key: &'static str,
    default_address: &'static str,
    default_port: u16,
}

fn rm_webapp_key(policy: HttpPolicy) -> WebAppKey {
    if policy.is_secure() {
        WebAppKey {
            key: RM_WEBAPP_HTTPS_ADDRESS,
            default_address: DEFAULT_RM_WEBAPP_HTTPS_ADDRESS,
            default_port: DEFAULT_RM_WEBAPP_HTTPS_PORT,
        }
    } else {
        WebAppKey {
            key: RM_WEBAPP_ADDRESS,
            default_address: DEFAULT_RM_WEBAPP_ADDRESS,
            default_port: DEFAULT_RM_WEBAPP_PORT,
        }
    }
}

fn nm_webapp_key(policy: HttpPolicy) -> (&'static str, &'static str) {
    if policy.is_secure() {
        (NM_WEBAPP_HTTPS_ADDRESS, DEFAULT_NM_WEBAPP_HTTPS_ADDRESS)
    } else {
        (NM_WEBAPP_ADDRESS, DEFAULT_NM_WEBAPP_ADDRESS)
    }
}

/// Change the port of the RM web address, keeping its host
///
/// The host is everything before the first `:` of the current
/// (unresolved) RM web address.
pub fn set_rm_webapp_port(conf: &mut Configuration, port: u16) {
    let current = get_rm_webapp_url_without_scheme(conf);
    let hostname = match current.find(':') {
        Some(idx) => &current[..idx],
        None => current.as_str(),
    };
    set_rm_webapp_hostname_and_port(conf, hostname, port);
}

/// Set the RM web address for the active policy to `hostname:port`
pub fn set_rm_webapp_hostname_and_port(conf: &mut Configuration, hostname: &str, port: u16) {
    let key = rm_webapp_key(HttpPolicy::from_config(conf)).key;
    conf.set(key, format!("{hostname}:{port}"));
}

/// Set the NM web address for the active policy to `hostname:port`
pub fn set_nm_webapp_hostname_and_port(conf: &mut Configuration, hostname: &str, port: u16) {
    let (key, _) = nm_webapp_key(HttpPolicy::from_config(conf));
    conf.set(key, format!("{hostname}:{port}"));
}

/// The configured RM web address with the scheme prefix
pub fn get_rm_webapp_url_with_scheme(conf: &Configuration) -> String {
    format!(
        "{}{}",
        get_http_scheme_prefix(conf),
        get_rm_webapp_url_without_scheme(conf)
    )
}

/// The configured RM web address, or the default for the active policy
pub fn get_rm_webapp_url_without_scheme(conf: &Configuration) -> String {
    let key = rm_webapp_key(HttpPolicy::from_config(conf));
    conf.get_or(key.key, key.default_address)
}

/// Hosts the application master web filter should accept requests from
pub fn get_proxy_hosts_and_ports_for_am_filter(
    conf: &Configuration,
) -> Result<Vec<String>, AddressError> {
    get_proxy_hosts_and_ports_for_am_filter_using(conf, &SystemResolver)
}

/// Hosts the application master web filter should accept requests from
///
/// A configured proxy address is returned as-is, whatever the HA settings.
/// Otherwise every HA resource manager web address that parses is resolved
/// and returned; unparsable ones are skipped. When HA is off or nothing
/// parsed, the single resolved RM web address is returned.
pub fn get_proxy_hosts_and_ports_for_am_filter_using(
    conf: &Configuration,
    resolver: &dyn HostResolver,
) -> Result<Vec<String>, AddressError> {
    if let Some(proxy) = configured_proxy(conf) {
        return Ok(vec![proxy.to_string()]);
    }

    let mut addrs = Vec::new();
    if is_ha_enabled(conf) {
        let policy = HttpPolicy::from_config(conf);
        for addr in rm_ha_webapp_addresses(conf, policy) {
            match create_socket_addr(&addr, None, resolver) {
                Ok(socket_addr) => addrs.push(resolved_host_and_port(&socket_addr, resolver)),
                Err(e) => tracing::debug!("Skipping HA web address {addr}: {e}"),
            }
        }
    }

    if addrs.is_empty() {
        addrs.push(get_resolved_rm_webapp_url_without_scheme_using(
            conf, resolver,
        )?);
    }
    Ok(addrs)
}

/// The proxy address, or the resolved RM web address if none is set
pub fn get_proxy_host_and_port(conf: &Configuration) -> Result<String, AddressError> {
    get_proxy_host_and_port_using(conf, &SystemResolver)
}

pub fn get_proxy_host_and_port_using(
    conf: &Configuration,
    resolver: &dyn HostResolver,
) -> Result<String, AddressError> {
    match configured_proxy(conf) {
        Some(proxy) => Ok(proxy.to_string()),
        None => get_resolved_rm_webapp_url_without_scheme_using(conf, resolver),
    }
}

fn configured_proxy(conf: &Configuration) -> Option<&str> {
    conf.get(PROXY_ADDRESS).filter(|addr| !addr.is_empty())
}

/// The resolved RM web address with the scheme prefix
pub fn get_resolved_rm_webapp_url_with_scheme(
    conf: &Configuration,
) -> Result<String, AddressError> {
    get_resolved_rm_webapp_url_with_scheme_using(conf, &SystemResolver)
}

pub fn get_resolved_rm_webapp_url_with_scheme_using(
    conf: &Configuration,
    resolver: &dyn HostResolver,
) -> Result<String, AddressError> {
    Ok(format!(
        "{}{}",
        get_http_scheme_prefix(conf),
        get_resolved_rm_webapp_url_without_scheme_using(conf, resolver)?
    ))
}

/// The RM web address as remote clients should see it
pub fn get_resolved_rm_webapp_url_without_scheme(
    conf: &Configuration,
) -> Result<String, AddressError> {
    get_resolved_rm_webapp_url_without_scheme_using(conf, &SystemResolver)
}

pub fn get_resolved_rm_webapp_url_without_scheme_using(
    conf: &Configuration,
    resolver: &dyn HostResolver,
) -> Result<String, AddressError> {
    let policy = if HttpPolicy::from_config(conf).is_secure() {
        HttpPolicy::HttpsOnly
    } else {
        HttpPolicy::HttpOnly
    };
    get_resolved_rm_webapp_url_without_scheme_with_policy_using(conf, policy, resolver)
}

/// The resolved RM web address for an explicit policy
pub fn get_resolved_rm_webapp_url_without_scheme_with_policy(
    conf: &Configuration,
    policy: HttpPolicy,
) -> Result<String, AddressError> {
    get_resolved_rm_webapp_url_without_scheme_with_policy_using(conf, policy, &SystemResolver)
}

/// Resolve the RM web address for `policy`
///
/// Wildcard, loopback and unresolvable hosts are reported as the local
/// machine's canonical host name; see [`resolved_host_and_port`].
pub fn get_resolved_rm_webapp_url_without_scheme_with_policy_using(
    conf: &Configuration,
    policy: HttpPolicy,
    resolver: &dyn HostResolver,
) -> Result<String, AddressError> {
    let key = rm_webapp_key(policy);
    let address =
        conf.get_socket_addr_using(key.key, key.default_address, key.default_port, resolver)?;
    Ok(resolved_host_and_port(&address, resolver))
}

/// The configured NM web address, or the default for the active policy
pub fn get_nm_webapp_url_without_scheme(conf: &Configuration) -> String {
    let (key, default) = nm_webapp_key(HttpPolicy::from_config(conf));
    conf.get_or(key, default)
}

/// The configured NM web address with the scheme prefix
pub fn get_nm_webapp_url_with_scheme(conf: &Configuration) -> String {
    format!(
        "{}{}",
        get_http_scheme_prefix(conf),
        get_nm_webapp_url_without_scheme(conf)
    )
}

/// `https://` when the configured policy is HTTPS only, else `http://`
pub fn get_http_scheme_prefix(conf: &Configuration) -> &'static str {
    HttpPolicy::from_config(conf).scheme_prefix()
}

/// Prefix `url` with `scheme_prefix` unless it already has a scheme
///
/// A scheme is present when `://` appears after at least one character.
pub fn get_url_with_scheme(scheme_prefix: &str, url: &str) -> String {
    if url.find("://").is_some_and(|idx| idx > 0) {
        url.to_string()
    } else {
        format!("{scheme_prefix}{url}")
    }
}
