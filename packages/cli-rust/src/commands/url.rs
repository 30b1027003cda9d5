//! URL scheme command

use anyhow::Result;
use clap::Args;
use yarn_webapp_core::Configuration;
use yarn_webapp_core::webapp::{get_http_scheme_prefix, get_url_with_scheme};

/// Arguments for the url command
#[derive(Args)]
pub struct UrlArgs {
    /// URL or host:port to prefix
    pub url: String,

    /// Scheme prefix to add (default: from the configured HTTP policy)
    #[arg(long)]
    pub scheme_prefix: Option<String>,
}

/// Print the URL with a scheme, leaving URLs that already have one alone
pub fn cmd_url(args: &UrlArgs, conf: &Configuration) -> Result<()> {
    let prefix = scheme_prefix(args.scheme_prefix.as_deref(), conf);
    println!("{}", get_url_with_scheme(&prefix, &args.url));
    Ok(())
}

/// Normalize a user-supplied prefix so "https" and "https://" both work
fn scheme_prefix(requested: Option<&str>, conf: &Configuration) -> String {
    match requested {
        Some(p) if p.ends_with("://") => p.to_string(),
        Some(p) => format!("{}://", p.trim_end_matches(':')),
        None => get_http_scheme_prefix(conf).to_string(),
    }
}
