//! Address parsing error types
//!
//! Errors that can occur while turning configured address strings into
//! socket addresses.

use thiserror::Error;

/// Errors that can occur when parsing a `host:port` address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Empty or whitespace-only address
    #[error("Address cannot be empty")]
    Empty,

    /// No usable host in the address
    #[error("Does not contain a valid host:port authority: {0}")]
    InvalidAuthority(String),

    /// Port is present but not a number in 0-65535
    #[error("Invalid port '{port}' in address: {target}")]
    InvalidPort { target: String, port: String },

    /// Port is absent and no default was supplied
    #[error("No port in address and no default port given: {0}")]
    MissingPort(String),
}
