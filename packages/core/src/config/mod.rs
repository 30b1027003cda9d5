//! Configuration management for yarn-webapp
//!
//! Handles loading and saving the JSONC `yarn-site.json` file that backs
//! the key/value [`Configuration`] store.

pub mod keys;
pub mod paths;
pub mod schema;

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use jsonc_parser::parse_to_serde_value;

pub use paths::{get_config_dir, get_config_path};
pub use schema::Configuration;

/// Load configuration from the default config file
///
/// Returns an empty configuration if the file doesn't exist, so every
/// lookup falls back to its built-in default.
pub fn load_config() -> Result<Configuration> {
    let config_path =
        get_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;
    load_config_from(&config_path)
}

/// Load configuration from a specific file
///
/// Supports JSONC (JSON with comments).
pub fn load_config_from(config_path: &Path) -> Result<Configuration> {
    if !config_path.exists() {
        tracing::debug!(
            "Config file not found, using defaults: {}",
            config_path.display()
        );
        return Ok(Configuration::new());
    }

    let mut file = File::open(config_path)
        .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    // Parse JSONC (JSON with comments)
    let parsed_value = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| anyhow::anyhow!("Invalid JSONC in config file: {}", e))?;

    // An empty or comment-only file is an empty configuration
    let Some(parsed_value) = parsed_value else {
        return Ok(Configuration::new());
    };

    let config = Configuration::from_json_value(parsed_value)
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    tracing::debug!(
        "Loaded {} keys from {}",
        config.len(),
        config_path.display()
    );
    Ok(config)
}

/// Save configuration to the default config file
pub fn save_config(config: &Configuration) -> Result<()> {
    let config_path =
        get_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;
    save_config_to(config, &config_path)
}

/// Save configuration to a specific file
///
/// Creates a backup of the existing file (yarn-site.json.bak) before
/// overwriting, and creates the parent directory if needed.
pub fn save_config_to(config: &Configuration, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
        tracing::info!("Created config directory: {}", parent.display());
    }

    if config_path.exists() {
        let backup_path = config_path.with_extension("json.bak");
        fs::copy(config_path, &backup_path)
            .with_context(|| format!("Failed to create backup at: {}", backup_path.display()))?;
        tracing::debug!("Created config backup: {}", backup_path.display());
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;

    let mut file = File::create(config_path)
        .with_context(|| format!("Failed to create config file: {}", config_path.display()))?;

    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    tracing::debug!("Saved config to: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keys::{RM_HA_ENABLED, RM_HA_IDS, RM_WEBAPP_ADDRESS};

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let conf = load_config_from(&dir.path().join("yarn-site.json")).unwrap();
        assert!(conf.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("yarn-site.json");

        let mut conf = Configuration::new();
        conf.set(RM_WEBAPP_ADDRESS, "rm.example.com:8088");
        conf.set(RM_HA_ENABLED, "true");
        save_config_to(&conf, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, conf);
    }

    #[test]
    fn test_save_creates_backup_of_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarn-site.json");

        let mut conf = Configuration::new();
        conf.set(RM_WEBAPP_ADDRESS, "first:8088");
        save_config_to(&conf, &path).unwrap();
        conf.set(RM_WEBAPP_ADDRESS, "second:8088");
        save_config_to(&conf, &path).unwrap();

        let backup = load_config_from(&path.with_extension("json.bak")).unwrap();
        assert_eq!(backup.get(RM_WEBAPP_ADDRESS), Some("first:8088"));
    }

    #[test]
    fn test_load_accepts_comments_and_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarn-site.json");
        fs::write(
            &path,
            r#"{
                // HA pair
                "yarn.resourcemanager.ha.enabled": true,
                "yarn.resourcemanager.ha.rm-ids": ["rm1", "rm2"]
            }"#,
        )
        .unwrap();

        let conf = load_config_from(&path).unwrap();
        assert_eq!(conf.get(RM_HA_ENABLED), Some("true"));
        assert_eq!(conf.get_string_collection(RM_HA_IDS), vec!["rm1", "rm2"]);
    }

    #[test]
    fn test_load_comment_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarn-site.json");
        fs::write(&path, "// nothing configured yet\n").unwrap();
        assert!(load_config_from(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_jsonc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yarn-site.json");
        fs::write(&path, "{ \"a\": ").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
