//! Config show subcommand
//!
//! Displays current configuration in table or JSON format.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde_json::{Map, Value};
use yarn_webapp_core::Configuration;
use yarn_webapp_core::config::keys::{KNOWN_KEYS, default_value};

use crate::output::value_cell;

/// One row of the config listing
#[derive(Debug, PartialEq)]
struct Entry {
    key: String,
    value: String,
    is_default: bool,
}

/// Show current configuration
///
/// Known keys are always listed, with their built-in default when unset.
/// Any other configured keys (per-RM-id addresses, etc.) follow.
pub fn cmd_config_show(conf: &Configuration, config_path: &Path, json: bool) -> Result<()> {
    let entries = collect_entries(conf);

    if json {
        let map: Map<String, Value> = entries
            .into_iter()
            .map(|e| (e.key, Value::String(e.value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Value"]);
    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.key),
            value_cell(&entry.value, entry.is_default),
        ]);
    }
    println!("{table}");

    println!();
    println!("Config file: {}", config_path.display());

    Ok(())
}

fn collect_entries(conf: &Configuration) -> Vec<Entry> {
    let mut entries: Vec<Entry> = KNOWN_KEYS
        .iter()
        .filter_map(|&key| match (conf.get(key), default_value(key)) {
            (Some(value), _) => Some(Entry {
                key: key.to_string(),
                value: value.to_string(),
                is_default: false,
            }),
            (None, Some(default)) => Some(Entry {
                key: key.to_string(),
                value: default.to_string(),
                is_default: true,
            }),
            (None, None) => None,
        })
        .collect();

    entries.extend(
        conf.iter()
            .filter(|(key, _)| !KNOWN_KEYS.iter().any(|known| known == key))
            .map(|(key, value)| Entry {
                key: key.to_string(),
                value: value.to_string(),
                is_default: false,
            }),
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use yarn_webapp_core::config::keys::{PROXY_ADDRESS, RM_WEBAPP_ADDRESS};

    #[test]
    fn test_empty_config_lists_defaults() {
        let entries = collect_entries(&Configuration::new());
        assert!(entries.iter().all(|e| e.is_default));
        assert!(entries.iter().any(|e| e.key == RM_WEBAPP_ADDRESS));
        // No default, not set
        assert!(!entries.iter().any(|e| e.key == PROXY_ADDRESS));
    }

    #[test]
    fn test_configured_values_override_defaults() {
        let mut conf = Configuration::new();
        conf.set(RM_WEBAPP_ADDRESS, "rm.example.com:8088");
        let entries = collect_entries(&conf);
        let rm = entries.iter().find(|e| e.key == RM_WEBAPP_ADDRESS).unwrap();
        assert_eq!(rm.value, "rm.example.com:8088");
        assert!(!rm.is_default);
    }

    #[test]
    fn test_extra_keys_are_listed_after_known_keys() {
        let mut conf = Configuration::new();
        conf.set("yarn.resourcemanager.webapp.address.rm1", "rm1:8088");
        let entries = collect_entries(&conf);
        let last = entries.last().unwrap();
        assert_eq!(last.key, "yarn.resourcemanager.webapp.address.rm1");
        assert_eq!(last.value, "rm1:8088");
    }
}
