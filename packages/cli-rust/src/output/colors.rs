//! Color utilities for CLI output
//!
//! Provides consistent table cell styling for policies and config values.

use comfy_table::{Cell, Color};
use yarn_webapp_core::HttpPolicy;

/// Style an HTTP policy cell
///
/// - HTTPS_ONLY -> green
/// - HTTP_AND_HTTPS -> yellow
/// - HTTP_ONLY -> default
pub fn policy_cell(policy: HttpPolicy) -> Cell {
    let cell = Cell::new(policy.as_str());
    match policy {
        HttpPolicy::HttpsOnly => cell.fg(Color::Green),
        HttpPolicy::HttpAndHttps => cell.fg(Color::Yellow),
        HttpPolicy::HttpOnly => cell,
    }
}

/// Style a config value cell, dimming built-in defaults
pub fn value_cell(value: &str, is_default: bool) -> Cell {
    if is_default {
        Cell::new(format!("{value} (default)")).fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}

/// Format an error message for a table cell
pub fn format_error(message: &str) -> String {
    format!("error: {message}")
}
