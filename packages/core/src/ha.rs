//! Resource manager high availability helpers

use crate::config::Configuration;
use crate::config::keys::{
    DEFAULT_RM_HA_ENABLED, RM_HA_ENABLED, RM_HA_IDS, RM_WEBAPP_ADDRESS, RM_WEBAPP_HTTPS_ADDRESS,
    add_suffix,
};
use crate::http::HttpPolicy;

/// Whether resource manager HA is enabled
pub fn is_ha_enabled(conf: &Configuration) -> bool {
    conf.get_bool(RM_HA_ENABLED, DEFAULT_RM_HA_ENABLED)
}

/// The configured resource manager ids
pub fn rm_ha_ids(conf: &Configuration) -> Vec<String> {
    conf.get_string_collection(RM_HA_IDS)
}

/// Web addresses of every HA resource manager, in id order
///
/// Reads `<webapp key>.<rm-id>` for each id, using the HTTPS key when the
/// policy is secure. Ids without a configured address are skipped.
pub fn rm_ha_webapp_addresses(conf: &Configuration, policy: HttpPolicy) -> Vec<String> {
    let prefix = if policy.is_secure() {
        RM_WEBAPP_HTTPS_ADDRESS
    } else {
        RM_WEBAPP_ADDRESS
    };

    rm_ha_ids(conf)
        .iter()
        .filter_map(|id| {
            let addr = conf.get(&add_suffix(prefix, id)).map(str::to_string);
            if addr.is_none() {
                tracing::debug!("No web address configured for RM id {id}");
            }
            addr
        })
        .collect()
}
