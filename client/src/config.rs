//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled. Unset or unparseable values fall
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
/// Effective lifetime of a backend-issued token.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3599;
pub const DEFAULT_EXPIRY_CHECK_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: &'static str,
    pub session_ttl: Duration,
    pub expiry_check_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            expiry_check_interval: Duration::from_millis(DEFAULT_EXPIRY_CHECK_MS),
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at compile time.
    ///
    /// - `PORTAL_API_BASE`: REST base URL (trailing `/` trimmed)
    /// - `PORTAL_SESSION_TTL_SECS`: client-side session lifetime
    /// - `PORTAL_EXPIRY_CHECK_MS`: upper bound between expiry checks
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(
            option_env!("PORTAL_API_BASE"),
            option_env!("PORTAL_SESSION_TTL_SECS"),
            option_env!("PORTAL_EXPIRY_CHECK_MS"),
        )
    }

    fn from_raw(api_base: Option<&'static str>, ttl_secs: Option<&str>, check_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(defaults.api_base);
        Self {
            api_base,
            session_ttl: parse_positive_u64(ttl_secs).map_or(defaults.session_ttl, Duration::from_secs),
            expiry_check_interval: parse_positive_u64(check_ms)
                .map_or(defaults.expiry_check_interval, Duration::from_millis),
        }
    }
}

fn parse_positive_u64(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|v| *v > 0)
}
