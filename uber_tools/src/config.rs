use std::time::Duration;

use flg_common::Secret;
use log::*;

pub const DEFAULT_UBER_API_URL: &str = "https://api.uber.com";
pub const DEFAULT_UBER_AUTH_URL: &str = "https://login.uber.com";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct UberConfig {
    pub client_id: String,
    pub client_secret: Secret<String>,
    /// Base URL of the rider API, e.g. `https://api.uber.com`.
    pub api_url: String,
    /// Base URL of the OAuth host, e.g. `https://login.uber.com`.
    pub auth_url: String,
    /// Applied to every outbound request. The upstream has no server-side cap, so a hung
    /// provider would otherwise stall the calling task indefinitely.
    pub timeout: Duration,
}

impl Default for UberConfig {
    fn default() -> Self {
        Self {
            client_id: String::default(),
            client_secret: Secret::default(),
            api_url: DEFAULT_UBER_API_URL.to_string(),
            auth_url: DEFAULT_UBER_AUTH_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl UberConfig {
    pub fn from_env_or_default() -> Self {
        let client_id = std::env::var("FLG_UBER_CLIENT_ID").unwrap_or_else(|_| {
            error!("🚕️ FLG_UBER_CLIENT_ID is not set. Uber OAuth will not work without it.");
            String::default()
        });
        let client_secret = Secret::new(std::env::var("FLG_UBER_CLIENT_SECRET").unwrap_or_else(|_| {
            error!("🚕️ FLG_UBER_CLIENT_SECRET is not set. Uber OAuth will not work without it.");
            String::default()
        }));
        let api_url = std::env::var("FLG_UBER_API_URL").unwrap_or_else(|_| {
            info!("🚕️ FLG_UBER_API_URL not set, using {DEFAULT_UBER_API_URL}");
            DEFAULT_UBER_API_URL.to_string()
        });
        let auth_url = std::env::var("FLG_UBER_AUTH_URL").unwrap_or_else(|_| {
            info!("🚕️ FLG_UBER_AUTH_URL not set, using {DEFAULT_UBER_AUTH_URL}");
            DEFAULT_UBER_AUTH_URL.to_string()
        });
        let timeout = http_timeout_from_env();
        Self { client_id, client_secret, api_url, auth_url, timeout }
    }
}

// `FLG_HTTP_TIMEOUT_SECS`, default 30.
fn http_timeout_from_env() -> Duration {
    std::env::var("FLG_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| {
            s.parse::<u64>()
                .map_err(|e| warn!("Invalid value for FLG_HTTP_TIMEOUT_SECS ({s}). {e}"))
                .ok()
        })
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT)
}
