//! Configuration key names and their defaults
//!
//! Keys follow the `yarn-site` naming used by cluster deployments so that
//! existing values can be copied over as-is.

/// Resource manager web UI address (HTTP)
pub const RM_WEBAPP_ADDRESS: &str = "yarn.resourcemanager.webapp.address";
pub const DEFAULT_RM_WEBAPP_PORT: u16 = 8088;
pub const DEFAULT_RM_WEBAPP_ADDRESS: &str = "0.0.0.0:8088";

/// Resource manager web UI address (HTTPS)
pub const RM_WEBAPP_HTTPS_ADDRESS: &str = "yarn.resourcemanager.webapp.https.address";
pub const DEFAULT_RM_WEBAPP_HTTPS_PORT: u16 = 8090;
pub const DEFAULT_RM_WEBAPP_HTTPS_ADDRESS: &str = "0.0.0.0:8090";

/// Node manager web UI address (HTTP)
pub const NM_WEBAPP_ADDRESS: &str = "yarn.nodemanager.webapp.address";
pub const DEFAULT_NM_WEBAPP_PORT: u16 = 8042;
pub const DEFAULT_NM_WEBAPP_ADDRESS: &str = "0.0.0.0:8042";

/// Node manager web UI address (HTTPS)
pub const NM_WEBAPP_HTTPS_ADDRESS: &str = "yarn.nodemanager.webapp.https.address";
pub const DEFAULT_NM_WEBAPP_HTTPS_PORT: u16 = 8044;
pub const DEFAULT_NM_WEBAPP_HTTPS_ADDRESS: &str = "0.0.0.0:8044";

/// Dedicated web proxy address for the application master filter.
/// Unset by default, in which case the RM address is used.
pub const PROXY_ADDRESS: &str = "yarn.web-proxy.address";

/// Whether resource manager high availability is enabled
pub const RM_HA_ENABLED: &str = "yarn.resourcemanager.ha.enabled";
pub const DEFAULT_RM_HA_ENABLED: bool = false;

/// Comma-separated list of resource manager ids when HA is enabled
pub const RM_HA_IDS: &str = "yarn.resourcemanager.ha.rm-ids";

/// HTTP policy: HTTP_ONLY, HTTPS_ONLY or HTTP_AND_HTTPS
pub const HTTP_POLICY: &str = "yarn.http.policy";
pub const DEFAULT_HTTP_POLICY: &str = "HTTP_ONLY";

/// Append a per-instance suffix to a key
///
/// `add_suffix("yarn.resourcemanager.webapp.address", "rm1")` yields
/// `yarn.resourcemanager.webapp.address.rm1`. An empty suffix leaves the
/// key unchanged.
pub fn add_suffix(key: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        key.to_string()
    } else {
        format!("{key}.{suffix}")
    }
}

/// Every key this crate reads or writes, for listing in the CLI
pub const KNOWN_KEYS: &[&str] = &[
    RM_WEBAPP_ADDRESS,
    RM_WEBAPP_HTTPS_ADDRESS,
    NM_WEBAPP_ADDRESS,
    NM_WEBAPP_HTTPS_ADDRESS,
    PROXY_ADDRESS,
    RM_HA_ENABLED,
    RM_HA_IDS,
    HTTP_POLICY,
];

/// Built-in default for a key, if it has one
pub fn default_value(key: &str) -> Option<&'static str> {
    match key {
        RM_WEBAPP_ADDRESS => Some(DEFAULT_RM_WEBAPP_ADDRESS),
        RM_WEBAPP_HTTPS_ADDRESS => Some(DEFAULT_RM_WEBAPP_HTTPS_ADDRESS),
        NM_WEBAPP_ADDRESS => Some(DEFAULT_NM_WEBAPP_ADDRESS),
        NM_WEBAPP_HTTPS_ADDRESS => Some(DEFAULT_NM_WEBAPP_HTTPS_ADDRESS),
        RM_HA_ENABLED => Some("false"),
        HTTP_POLICY => Some(DEFAULT_HTTP_POLICY),
        _ => None,
    }
}

/// Map a short alias ("rm", "nm_https", "policy", ...) to its full key
///
/// Anything that is not an alias is returned unchanged.
pub fn resolve_alias(key: &str) -> &str {
    match key.to_lowercase().as_str() {
        "rm" | "rm_webapp" | "rm_address" => RM_WEBAPP_ADDRESS,
        "rm_https" | "rm_webapp_https" | "rm_https_address" => RM_WEBAPP_HTTPS_ADDRESS,
        "nm" | "nm_webapp" | "nm_address" => NM_WEBAPP_ADDRESS,
        "nm_https" | "nm_webapp_https" | "nm_https_address" => NM_WEBAPP_HTTPS_ADDRESS,
        "proxy" | "proxy_address" => PROXY_ADDRESS,
        "ha" | "ha_enabled" => RM_HA_ENABLED,
        "rm_ids" | "ha_ids" => RM_HA_IDS,
        "policy" | "http_policy" => HTTP_POLICY,
        _ => key,
    }
}
