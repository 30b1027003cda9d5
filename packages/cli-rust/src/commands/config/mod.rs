//! Config subcommand implementations
//!
//! Provides `ywa config` subcommands for viewing and managing configuration.

mod get;
mod set;
mod show;

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use yarn_webapp_core::Configuration;

pub use get::cmd_config_get;
pub use set::{cmd_config_set, cmd_config_unset};
pub use show::cmd_config_show;

/// Configuration command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration management subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Get a single configuration value
    Get {
        /// Configuration key (e.g., "rm", "policy", "yarn.web-proxy.address")
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set (e.g., "rm", "ha", "rm_ids")
        key: String,
        /// Value to set
        value: String,
    },
    /// Remove a configuration value, restoring its default
    Unset {
        /// Configuration key to remove
        key: String,
    },
}

/// Handle config command
///
/// Routes to the appropriate handler based on the subcommand.
/// If no subcommand is given, defaults to Show.
pub fn cmd_config(
    args: ConfigArgs,
    conf: Configuration,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    match args.command {
        Some(ConfigSubcommands::Show { json }) => cmd_config_show(&conf, config_path, json),
        Some(ConfigSubcommands::Get { key }) => cmd_config_get(&conf, &key),
        Some(ConfigSubcommands::Set { key, value }) => {
            cmd_config_set(conf, config_path, &key, &value, quiet)
        }
        Some(ConfigSubcommands::Unset { key }) => {
            cmd_config_unset(conf, config_path, &key, quiet)
        }
        None => {
            // Default to show when no subcommand given
            cmd_config_show(&conf, config_path, args.json)
        }
    }
}
