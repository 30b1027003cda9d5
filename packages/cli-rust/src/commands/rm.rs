//! Resource manager address command
//!
//! Prints the RM web address, optionally resolved and with a scheme.

use anyhow::Result;
use clap::Args;
use yarn_webapp_core::webapp::{
    get_resolved_rm_webapp_url_with_scheme, get_resolved_rm_webapp_url_without_scheme,
    get_rm_webapp_url_with_scheme, get_rm_webapp_url_without_scheme,
};
use yarn_webapp_core::{Configuration, HttpPolicy};

use super::with_policy_override;

/// Arguments for the rm command
#[derive(Args)]
pub struct RmArgs {
    /// Include the http:// or https:// prefix
    #[arg(long)]
    pub scheme: bool,

    /// Replace wildcard and loopback hosts with this machine's host name
    #[arg(long)]
    pub resolved: bool,

    /// Override the configured HTTP policy (HTTP_ONLY, HTTPS_ONLY, HTTP_AND_HTTPS)
    #[arg(long)]
    pub policy: Option<HttpPolicy>,
}

/// Print the resource manager web address
///
/// Outputs just the address for scripting.
pub fn cmd_rm(args: &RmArgs, conf: &Configuration) -> Result<()> {
    let conf = with_policy_override(conf, args.policy);

    let url = match (args.resolved, args.scheme) {
        (true, true) => get_resolved_rm_webapp_url_with_scheme(&conf)?,
        (true, false) => get_resolved_rm_webapp_url_without_scheme(&conf)?,
        (false, true) => get_rm_webapp_url_with_scheme(&conf),
        (false, false) => get_rm_webapp_url_without_scheme(&conf),
    };

    println!("{url}");
    Ok(())
}
