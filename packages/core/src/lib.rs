//! yarn-webapp-core - Core library for yarn-webapp
//!
//! Computes the web UI addresses of a cluster resource manager (RM) and its
//! node managers (NM) from `yarn-site` style configuration, taking the HTTP
//! policy and resource manager high availability into account.

pub mod config;
pub mod ha;
pub mod http;
pub mod net;
pub mod version;
pub mod webapp;

pub use config::{Configuration, load_config, load_config_from, save_config, save_config_to};
pub use http::HttpPolicy;
pub use net::{AddressError, HostResolver, SocketAddress, SystemResolver};
pub use version::{get_version, get_version_long};
