//! HTTP policy for the web UIs
//!
//! The policy decides which address keys are consulted and which scheme
//! prefix URLs get.

use std::fmt;
use std::str::FromStr;

use crate::config::Configuration;
use crate::config::keys::{DEFAULT_HTTP_POLICY, HTTP_POLICY};

pub const HTTP_SCHEME_PREFIX: &str = "http://";
pub const HTTPS_SCHEME_PREFIX: &str = "https://";

/// Which protocols the web UIs are served over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpPolicy {
    #[default]
    HttpOnly,
    HttpsOnly,
    HttpAndHttps,
}

impl HttpPolicy {
    /// Read the policy from `yarn.http.policy`
    ///
    /// Unknown values fall back to HTTP only.
    pub fn from_config(conf: &Configuration) -> Self {
        let value = conf.get_trimmed_or(HTTP_POLICY, DEFAULT_HTTP_POLICY);
        value.parse().unwrap_or_else(|_| {
            tracing::warn!("Unrecognized {HTTP_POLICY} '{value}', using HTTP_ONLY");
            Self::HttpOnly
        })
    }

    /// True when only HTTPS is served
    pub fn is_secure(self) -> bool {
        self == Self::HttpsOnly
    }

    /// `https://` when secure, `http://` otherwise
    pub fn scheme_prefix(self) -> &'static str {
        if self.is_secure() {
            HTTPS_SCHEME_PREFIX
        } else {
            HTTP_SCHEME_PREFIX
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HttpOnly => "HTTP_ONLY",
            Self::HttpsOnly => "HTTPS_ONLY",
            Self::HttpAndHttps => "HTTP_AND_HTTPS",
        }
    }
}

impl FromStr for HttpPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "HTTP_ONLY" => Ok(Self::HttpOnly),
            "HTTPS_ONLY" => Ok(Self::HttpsOnly),
            "HTTP_AND_HTTPS" => Ok(Self::HttpAndHttps),
            _ => Err(format!(
                "Invalid HTTP policy: '{s}'. Use HTTP_ONLY, HTTPS_ONLY, or HTTP_AND_HTTPS"
            )),
        }
    }
}

impl fmt::Display for HttpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_http_only() {
        assert_eq!(
            HttpPolicy::from_config(&Configuration::new()),
            HttpPolicy::HttpOnly
        );
    }

    #[test]
    fn test_from_config_reads_policy() {
        let mut conf = Configuration::new();
        conf.set(HTTP_POLICY, "HTTPS_ONLY");
        assert_eq!(HttpPolicy::from_config(&conf), HttpPolicy::HttpsOnly);
    }

    #[test]
    fn test_from_config_unknown_falls_back() {
        let mut conf = Configuration::new();
        conf.set(HTTP_POLICY, "SPDY_ONLY");
        assert_eq!(HttpPolicy::from_config(&conf), HttpPolicy::HttpOnly);
    }

    #[test]
    fn test_parse_accepts_lowercase_and_dashes() {
        assert_eq!("https-only".parse::<HttpPolicy>(), Ok(HttpPolicy::HttpsOnly));
        assert_eq!("http_and_https".parse::<HttpPolicy>(), Ok(HttpPolicy::HttpAndHttps));
    }

    #[test]
    fn test_only_https_only_is_secure() {
        assert!(HttpPolicy::HttpsOnly.is_secure());
        assert!(!HttpPolicy::HttpOnly.is_secure());
        assert!(!HttpPolicy::HttpAndHttps.is_secure());
    }

    #[test]
    fn test_scheme_prefix() {
        assert_eq!(HttpPolicy::HttpsOnly.scheme_prefix(), "https://");
        assert_eq!(HttpPolicy::HttpAndHttps.scheme_prefix(), "http://");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let policy = HttpPolicy::HttpAndHttps;
        assert_eq!(policy.to_string().parse::<HttpPolicy>(), Ok(policy));
    }
}
