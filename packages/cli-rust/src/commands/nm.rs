//! Node manager address command

use anyhow::Result;
use clap::Args;
use yarn_webapp_core::webapp::{get_nm_webapp_url_with_scheme, get_nm_webapp_url_without_scheme};
use yarn_webapp_core::{Configuration, HttpPolicy};

use super::with_policy_override;

/// Arguments for the nm command
#[derive(Args)]
pub struct NmArgs {
    /// Include the http:// or https:// prefix
    #[arg(long)]
    pub scheme: bool,

    /// Override the configured HTTP policy (HTTP_ONLY, HTTPS_ONLY, HTTP_AND_HTTPS)
    #[arg(long)]
    pub policy: Option<HttpPolicy>,
}

/// Print the node manager web address
pub fn cmd_nm(args: &NmArgs, conf: &Configuration) -> Result<()> {
    let conf = with_policy_override(conf, args.policy);

    let url = if args.scheme {
        get_nm_webapp_url_with_scheme(&conf)
    } else {
        get_nm_webapp_url_without_scheme(&conf)
    };

    println!("{url}");
    Ok(())
}
