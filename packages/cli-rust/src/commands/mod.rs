//! CLI command implementations
//!
//! Each command reads the loaded configuration; the `set-*` and `config`
//! commands also write it back.

mod config;
mod nm;
mod proxy;
mod rm;
mod set_address;
mod status;
mod url;

use std::borrow::Cow;

use yarn_webapp_core::config::keys::HTTP_POLICY;
use yarn_webapp_core::{Configuration, HttpPolicy};

pub use config::{ConfigArgs, cmd_config};
pub use nm::{NmArgs, cmd_nm};
pub use proxy::{ProxyArgs, cmd_proxy};
pub use rm::{RmArgs, cmd_rm};
pub use set_address::{
    SetAddressArgs, SetPortArgs, cmd_set_nm, cmd_set_rm, cmd_set_rm_port,
};
pub use status::{StatusArgs, cmd_status};
pub use url::{UrlArgs, cmd_url};

/// Apply a `--policy` override on top of the loaded configuration
fn with_policy_override(conf: &Configuration, policy: Option<HttpPolicy>) -> Cow<'_, Configuration> {
    match policy {
        Some(policy) => {
            let mut conf = conf.clone();
            conf.set(HTTP_POLICY, policy.as_str());
            Cow::Owned(conf)
        }
        None => Cow::Borrowed(conf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_override_replaces_configured_policy() {
        let mut conf = Configuration::new();
        conf.set(HTTP_POLICY, "HTTP_ONLY");
        let overridden = with_policy_override(&conf, Some(HttpPolicy::HttpsOnly));
        assert_eq!(HttpPolicy::from_config(&overridden), HttpPolicy::HttpsOnly);
        assert_eq!(conf.get(HTTP_POLICY), Some("HTTP_ONLY"));
    }

    #[test]
    fn no_override_borrows() {
        let conf = Configuration::new();
        assert!(matches!(with_policy_override(&conf, None), Cow::Borrowed(_)));
    }
}
