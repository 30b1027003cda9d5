//! Web proxy address command
//!
//! Prints the address the application master web filter trusts.

use anyhow::Result;
use clap::Args;
use yarn_webapp_core::Configuration;
use yarn_webapp_core::webapp::{get_proxy_host_and_port, get_proxy_hosts_and_ports_for_am_filter};

/// Arguments for the proxy command
#[derive(Args)]
pub struct ProxyArgs {
    /// List every host the AM filter accepts (one per HA resource manager)
    #[arg(long)]
    pub am_filter: bool,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Print the proxy host and port, or the full AM filter list
pub fn cmd_proxy(args: &ProxyArgs, conf: &Configuration) -> Result<()> {
    let hosts = if args.am_filter {
        get_proxy_hosts_and_ports_for_am_filter(conf)?
    } else {
        vec![get_proxy_host_and_port(conf)?]
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hosts)?);
    } else {
        for host in hosts {
            println!("{host}");
        }
    }
    Ok(())
}
