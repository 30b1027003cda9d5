//! Configuration store for yarn-webapp
//!
//! A flat map of `yarn-site` style keys to string values, serialized
//! to/from `~/.config/yarn-webapp/yarn-site.json`.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::{AddressError, HostResolver, SocketAddress, SystemResolver, create_socket_addr};

/// Key/value configuration
///
/// Values are always stored as strings; typed accessors parse on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, String>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from a parsed JSON object
    ///
    /// Strings, booleans and numbers are stored as their textual form.
    /// Arrays of scalars are joined with `,` so that list-valued keys such
    /// as `yarn.resourcemanager.ha.rm-ids` can be written as JSON arrays.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            bail!("Configuration must be a JSON object of key/value pairs");
        };

        let mut conf = Self::new();
        for (key, value) in map {
            let text = match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| scalar_to_string(&key, item))
                    .collect::<Result<Vec<_>>>()?
                    .join(","),
                other => scalar_to_string(&key, other)?,
            };
            conf.entries.insert(key, text);
        }
        Ok(conf)
    }

    /// Get the raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get the value for a key, or `default` if unset
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Get a whitespace-trimmed value; empty values count as unset
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Get a whitespace-trimmed value, or `default` if unset or empty
    pub fn get_trimmed_or(&self, key: &str, default: &str) -> String {
        self.get_trimmed(key).unwrap_or(default).to_string()
    }

    /// Get a boolean value
    ///
    /// Accepts `true`/`false` in any case. Anything else yields `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get_trimmed(key) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    /// Get a comma-separated list, trimming items and dropping empty ones
    pub fn get_string_collection(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parse a key into a socket address using the system resolver
    pub fn get_socket_addr(
        &self,
        key: &str,
        default_address: &str,
        default_port: u16,
    ) -> Result<SocketAddress, AddressError> {
        self.get_socket_addr_using(key, default_address, default_port, &SystemResolver)
    }

    /// Parse a key into a socket address
    ///
    /// Uses the trimmed configured value, or `default_address` when unset.
    /// `default_port` applies when the value carries no port.
    pub fn get_socket_addr_using(
        &self,
        key: &str,
        default_address: &str,
        default_port: u16,
        resolver: &dyn HostResolver,
    ) -> Result<SocketAddress, AddressError> {
        let addr = self.get_trimmed_or(key, default_address);
        create_socket_addr(&addr, Some(default_port), resolver)
    }

    /// Set a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a value, returning the old one
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Iterate over all entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn scalar_to_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => bail!("Invalid value for '{key}': null is not allowed"),
        Value::Array(_) | Value::Object(_) => {
            bail!("Invalid value for '{key}': nested arrays and objects are not allowed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys::*;
    use serde_json::json;

    #[test]
    fn test_get_or_falls_back_to_default() {
        let conf = Configuration::new();
        assert_eq!(
            conf.get_or(RM_WEBAPP_ADDRESS, DEFAULT_RM_WEBAPP_ADDRESS),
            "0.0.0.0:8088"
        );
    }

    #[test]
    fn test_get_trimmed_treats_blank_as_unset() {
        let mut conf = Configuration::new();
        conf.set(PROXY_ADDRESS, "   ");
        assert_eq!(conf.get_trimmed(PROXY_ADDRESS), None);
        conf.set(PROXY_ADDRESS, " proxy:9099 ");
        assert_eq!(conf.get_trimmed(PROXY_ADDRESS), Some("proxy:9099"));
    }

    #[test]
    fn test_get_bool_parses_case_insensitively() {
        let mut conf = Configuration::new();
        conf.set(RM_HA_ENABLED, "TRUE");
        assert!(conf.get_bool(RM_HA_ENABLED, false));
        conf.set(RM_HA_ENABLED, "False");
        assert!(!conf.get_bool(RM_HA_ENABLED, true));
    }

    #[test]
    fn test_get_bool_invalid_uses_default() {
        let mut conf = Configuration::new();
        conf.set(RM_HA_ENABLED, "yes");
        assert!(conf.get_bool(RM_HA_ENABLED, true));
        assert!(!conf.get_bool(RM_HA_ENABLED, false));
    }

    #[test]
    fn test_get_string_collection_trims_and_drops_empty() {
        let mut conf = Configuration::new();
        conf.set(RM_HA_IDS, " rm1, ,rm2 ,");
        assert_eq!(conf.get_string_collection(RM_HA_IDS), vec!["rm1", "rm2"]);
        assert!(conf.get_string_collection("missing").is_empty());
    }

    #[test]
    fn test_unset_removes_value() {
        let mut conf = Configuration::new();
        conf.set(PROXY_ADDRESS, "proxy:9099");
        assert_eq!(conf.unset(PROXY_ADDRESS), Some("proxy:9099".to_string()));
        assert!(conf.is_empty());
    }

    #[test]
    fn test_from_json_value_stringifies_scalars() {
        let conf = Configuration::from_json_value(json!({
            "yarn.resourcemanager.ha.enabled": true,
            "yarn.resourcemanager.ha.rm-ids": ["rm1", "rm2"],
            "yarn.resourcemanager.webapp.address": "rm.example.com:8088",
            "some.port": 8042
        }))
        .unwrap();

        assert_eq!(conf.get(RM_HA_ENABLED), Some("true"));
        assert_eq!(conf.get(RM_HA_IDS), Some("rm1,rm2"));
        assert_eq!(conf.get("some.port"), Some("8042"));
        assert_eq!(conf.len(), 4);
    }

    #[test]
    fn test_from_json_value_rejects_null() {
        let err = Configuration::from_json_value(json!({ "yarn.web-proxy.address": null }))
            .unwrap_err();
        assert!(err.to_string().contains("yarn.web-proxy.address"));
    }

    #[test]
    fn test_from_json_value_rejects_non_object() {
        assert!(Configuration::from_json_value(json!(["a", "b"])).is_err());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut conf = Configuration::new();
        conf.set(NM_WEBAPP_ADDRESS, "nm1:8042");
        let json = serde_json::to_value(&conf).unwrap();
        assert_eq!(json, json!({ "yarn.nodemanager.webapp.address": "nm1:8042" }));
    }
}
