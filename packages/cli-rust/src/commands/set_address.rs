//! Address-setting commands
//!
//! `set-rm`, `set-rm-port` and `set-nm` update the web address key for the
//! configured HTTP policy and save the configuration file.

use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;
use console::style;
use yarn_webapp_core::webapp::{
    get_nm_webapp_url_without_scheme, get_rm_webapp_url_without_scheme,
    set_nm_webapp_hostname_and_port, set_rm_webapp_hostname_and_port, set_rm_webapp_port,
};
use yarn_webapp_core::{Configuration, save_config_to};

/// Arguments for commands that set a host and port
#[derive(Args)]
pub struct SetAddressArgs {
    /// Host name or IP address
    pub host: String,
    /// Port number
    pub port: u16,
}

/// Arguments for commands that set only a port
#[derive(Args)]
pub struct SetPortArgs {
    /// Port number
    pub port: u16,
}

/// Set the resource manager web host and port
pub fn cmd_set_rm(
    args: &SetAddressArgs,
    mut conf: Configuration,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    validate_host(&args.host)?;
    set_rm_webapp_hostname_and_port(&mut conf, &args.host, args.port);
    save_config_to(&conf, config_path)?;
    report("resource manager", &get_rm_webapp_url_without_scheme(&conf), quiet);
    Ok(())
}

/// Change the resource manager web port, keeping its host
pub fn cmd_set_rm_port(
    args: &SetPortArgs,
    mut conf: Configuration,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    set_rm_webapp_port(&mut conf, args.port);
    save_config_to(&conf, config_path)?;
    report("resource manager", &get_rm_webapp_url_without_scheme(&conf), quiet);
    Ok(())
}

/// Set the node manager web host and port
pub fn cmd_set_nm(
    args: &SetAddressArgs,
    mut conf: Configuration,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    validate_host(&args.host)?;
    set_nm_webapp_hostname_and_port(&mut conf, &args.host, args.port);
    save_config_to(&conf, config_path)?;
    report("node manager", &get_nm_webapp_url_without_scheme(&conf), quiet);
    Ok(())
}

fn report(what: &str, address: &str, quiet: bool) {
    if !quiet {
        println!(
            "{} Set {what} web address = {address}",
            style("Success:").green().bold()
        );
    }
}

/// Reject hosts that would produce an unparsable `host:port`
fn validate_host(host: &str) -> Result<()> {
    if host.trim().is_empty() {
        bail!("Host cannot be empty");
    }
    if host.contains("://") {
        bail!("Host must not include a scheme: {host}");
    }
    if host.contains(':') {
        bail!("Host must not include a port: {host}. Pass the port as a separate argument.");
    }
    Ok(())
}
