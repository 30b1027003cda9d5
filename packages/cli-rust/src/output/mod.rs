//! Output utilities for CLI commands
//!
//! Color helpers for consistent styling of HTTP policies, configured
//! values and errors in tables.

pub mod colors;

pub use colors::{format_error, policy_cell, value_cell};
