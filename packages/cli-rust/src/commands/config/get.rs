//! Config get subcommand
//!
//! Retrieves a single configuration value by key.

use anyhow::{Result, bail};
use yarn_webapp_core::Configuration;
use yarn_webapp_core::config::keys::{KNOWN_KEYS, default_value, resolve_alias};

/// Get a single configuration value
///
/// Outputs just the value (no formatting) for scripting. Unset keys with a
/// built-in default print the default; unset keys without one print an
/// empty line.
pub fn cmd_config_get(conf: &Configuration, key: &str) -> Result<()> {
    println!("{}", lookup(conf, key)?);
    Ok(())
}

fn lookup(conf: &Configuration, key: &str) -> Result<String> {
    let key = resolve_alias(key);

    if let Some(value) = conf.get(key) {
        return Ok(value.to_string());
    }
    if let Some(default) = default_value(key) {
        return Ok(default.to_string());
    }
    if KNOWN_KEYS.iter().any(|known| *known == key) {
        return Ok(String::new());
    }

    bail!(
        "Configuration key not set: {key}\n\n\
        Known keys:\n  {}",
        KNOWN_KEYS.join("\n  ")
    );
}
