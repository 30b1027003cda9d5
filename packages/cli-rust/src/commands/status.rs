//! Status command implementation
//!
//! Shows every web address computed from the current configuration.

use std::fmt::Display;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, Table};
use serde::Serialize;
use yarn_webapp_core::ha::{is_ha_enabled, rm_ha_ids};
use yarn_webapp_core::webapp::{
    get_nm_webapp_url_with_scheme, get_proxy_host_and_port,
    get_proxy_hosts_and_ports_for_am_filter, get_resolved_rm_webapp_url_with_scheme,
    get_rm_webapp_url_with_scheme,
};
use yarn_webapp_core::{Configuration, HttpPolicy};

use crate::output::{format_error, policy_cell};

/// Arguments for the status command
#[derive(Args)]
pub struct StatusArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    pub json: bool,
}

/// A computed value, or the error that prevented computing it
///
/// Serializes as the bare value, or as `{"error": "..."}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Computed<T> {
    Value(T),
    Failed { error: String },
}

impl<T, E: Display> From<Result<T, E>> for Computed<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Snapshot of every computed address
///
/// Resolution failures are kept as error strings so one malformed key
/// doesn't hide the rest of the report.
#[derive(Debug, Serialize)]
struct AddressReport {
    http_policy: String,
    rm_webapp_url: String,
    rm_webapp_resolved_url: Computed<String>,
    nm_webapp_url: String,
    proxy_host_and_port: Computed<String>,
    ha_enabled: bool,
    rm_ha_ids: Vec<String>,
    am_filter_hosts: Computed<Vec<String>>,
}

impl AddressReport {
    fn collect(conf: &Configuration) -> Self {
        Self {
            http_policy: HttpPolicy::from_config(conf).to_string(),
            rm_webapp_url: get_rm_webapp_url_with_scheme(conf),
            rm_webapp_resolved_url: get_resolved_rm_webapp_url_with_scheme(conf).into(),
            nm_webapp_url: get_nm_webapp_url_with_scheme(conf),
            proxy_host_and_port: get_proxy_host_and_port(conf).into(),
            ha_enabled: is_ha_enabled(conf),
            rm_ha_ids: rm_ha_ids(conf),
            am_filter_hosts: get_proxy_hosts_and_ports_for_am_filter(conf).into(),
        }
    }
}

/// Show all computed addresses
pub fn cmd_status(args: &StatusArgs, conf: &Configuration, config_path: &Path) -> Result<()> {
    let report = AddressReport::collect(conf);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Address", "Value"]);

    table.add_row(vec![
        Cell::new("http_policy"),
        policy_cell(HttpPolicy::from_config(conf)),
    ]);
    table.add_row(vec![Cell::new("rm_webapp"), Cell::new(&report.rm_webapp_url)]);
    table.add_row(vec![
        Cell::new("rm_webapp (resolved)"),
        result_cell(&report.rm_webapp_resolved_url),
    ]);
    table.add_row(vec![Cell::new("nm_webapp"), Cell::new(&report.nm_webapp_url)]);
    table.add_row(vec![
        Cell::new("proxy"),
        result_cell(&report.proxy_host_and_port),
    ]);
    table.add_row(vec![
        Cell::new("ha_enabled"),
        Cell::new(report.ha_enabled.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("rm_ha_ids"),
        Cell::new(format_list(&report.rm_ha_ids)),
    ]);
    table.add_row(vec![
        Cell::new("am_filter_hosts"),
        match &report.am_filter_hosts {
            Computed::Value(hosts) => Cell::new(format_list(hosts)),
            Computed::Failed { error } => error_cell(error),
        },
    ]);

    println!("{table}");
    println!();
    println!("Config file: {}", config_path.display());

    Ok(())
}

fn result_cell(value: &Computed<String>) -> Cell {
    match value {
        Computed::Value(v) => Cell::new(v),
        Computed::Failed { error } => error_cell(error),
    }
}

fn error_cell(error: &str) -> Cell {
    Cell::new(format_error(error)).fg(Color::Red)
}

/// Format a list for display
fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
