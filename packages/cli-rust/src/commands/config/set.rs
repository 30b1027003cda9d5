//! Config set and unset subcommands
//!
//! Sets or removes a single configuration value and saves the file.

use std::path::Path;

use anyhow::{Result, bail};
use console::style;
use yarn_webapp_core::config::keys::{
    HTTP_POLICY, KNOWN_KEYS, RM_HA_ENABLED, RM_HA_IDS, resolve_alias,
};
use yarn_webapp_core::{Configuration, HttpPolicy, save_config_to};

/// Set a configuration value
///
/// Accepts short aliases ("rm", "policy", ...) or any dotted key, so
/// per-instance keys like `yarn.resourcemanager.webapp.address.rm1` can be
/// set directly.
pub fn cmd_config_set(
    mut conf: Configuration,
    config_path: &Path,
    key: &str,
    value: &str,
    quiet: bool,
) -> Result<()> {
    let key = resolve_alias(key);
    let normalized = normalize_value(key, value)?;

    conf.set(key, normalized.clone());
    save_config_to(&conf, config_path)?;

    if !quiet {
        println!(
            "{} Set {} = {}",
            style("Success:").green().bold(),
            key,
            normalized
        );
    }
    Ok(())
}

/// Remove a configuration value
pub fn cmd_config_unset(
    mut conf: Configuration,
    config_path: &Path,
    key: &str,
    quiet: bool,
) -> Result<()> {
    let key = resolve_alias(key);

    if conf.unset(key).is_none() {
        if !quiet {
            eprintln!(
                "{} {} was not set",
                style("Warning:").yellow().bold(),
                key
            );
        }
        return Ok(());
    }

    save_config_to(&conf, config_path)?;

    if !quiet {
        println!("{} Unset {}", style("Success:").green().bold(), key);
    }
    Ok(())
}

/// Validate a value for its key and return the form to store
fn normalize_value(key: &str, value: &str) -> Result<String> {
    if !key.contains('.') {
        bail!(
            "Unknown configuration key: {key}\n\n\
            Use a full key (e.g. yarn.resourcemanager.webapp.address.rm1)\n\
            or one of the aliases: rm, rm_https, nm, nm_https, proxy, ha, rm_ids, policy\n\n\
            Known keys:\n  {}",
            KNOWN_KEYS.join("\n  ")
        );
    }

    let value = value.trim();
    match key {
        HTTP_POLICY => {
            let policy: HttpPolicy = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok(policy.to_string())
        }
        RM_HA_ENABLED => {
            let parsed = parse_bool(value).ok_or_else(|| {
                anyhow::anyhow!("Invalid boolean value: {value}. Use: true/false, yes/no, or 1/0")
            })?;
            Ok(parsed.to_string())
        }
        RM_HA_IDS => {
            let ids: Vec<&str> = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if ids.is_empty() {
                bail!("{RM_HA_IDS} needs at least one resource manager id");
            }
            Ok(ids.join(","))
        }
        _ => Ok(value.to_string()),
    }
}

/// Parse boolean from various string representations
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
