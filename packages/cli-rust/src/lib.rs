//! yarn-webapp CLI - Inspect and set YARN web UI addresses
//!
//! This module contains the shared CLI implementation used by all binaries.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;
use yarn_webapp_core::{config, get_version, load_config_from};

/// Inspect and set YARN web UI addresses
#[derive(Parser)]
#[command(name = "yarn-webapp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and set YARN web UI addresses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to yarn-site.json (default: ~/.config/yarn-webapp/yarn-site.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resource manager web address
    Rm(commands::RmArgs),
    /// Show the node manager web address
    Nm(commands::NmArgs),
    /// Show the web proxy address (or the AM filter host list)
    Proxy(commands::ProxyArgs),
    /// Add a scheme prefix to a URL that has none
    Url(commands::UrlArgs),
    /// Set the resource manager web host and port
    SetRm(commands::SetAddressArgs),
    /// Change only the resource manager web port
    SetRmPort(commands::SetPortArgs),
    /// Set the node manager web host and port
    SetNm(commands::SetAddressArgs),
    /// Show every computed address
    Status(commands::StatusArgs),
    /// Manage configuration
    Config(commands::ConfigArgs),
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config::get_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?,
    };
    tracing::debug!("Using config file: {}", config_path.display());

    let conf = match load_config_from(&config_path) {
        Ok(conf) => {
            if cli.verbose > 0 {
                eprintln!(
                    "{} Config loaded from: {} ({} keys)",
                    style("[info]").cyan(),
                    config_path.display(),
                    conf.len()
                );
            }
            conf
        }
        Err(e) => {
            // Display rich error for invalid config
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e:#}");
            eprintln!();
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            eprintln!();
            eprintln!(
                "  {} The file must be a JSON object of key/value pairs.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Rm(args)) => commands::cmd_rm(&args, &conf),
        Some(Commands::Nm(args)) => commands::cmd_nm(&args, &conf),
        Some(Commands::Proxy(args)) => commands::cmd_proxy(&args, &conf),
        Some(Commands::Url(args)) => commands::cmd_url(&args, &conf),
        Some(Commands::SetRm(args)) => {
            commands::cmd_set_rm(&args, conf, &config_path, cli.quiet)
        }
        Some(Commands::SetRmPort(args)) => {
            commands::cmd_set_rm_port(&args, conf, &config_path, cli.quiet)
        }
        Some(Commands::SetNm(args)) => {
            commands::cmd_set_nm(&args, conf, &config_path, cli.quiet)
        }
        Some(Commands::Status(args)) => commands::cmd_status(&args, &conf, &config_path),
        Some(Commands::Config(args)) => {
            commands::cmd_config(args, conf, &config_path, cli.quiet)
        }
        None => {
            // No command - show a welcome message and hint to use --help
            if !cli.quiet {
                println!(
                    "{} {}",
                    style("yarn-webapp").cyan().bold(),
                    style(get_version()).dim()
                );
                println!();
                println!("Run {} for available commands.", style("--help").green());
            }
            Ok(())
        }
    }
}
