use std::time::Duration;

use log::*;

pub const DEFAULT_MONDO_API_URL: &str = "https://api.getmondo.co.uk";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct MondoConfig {
    /// Base URL of the banking API, e.g. `https://api.getmondo.co.uk`.
    pub api_url: String,
    /// Applied to every outbound request; the upstream blocks indefinitely without one.
    pub timeout: Duration,
}

impl Default for MondoConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_MONDO_API_URL.to_string(), timeout: DEFAULT_HTTP_TIMEOUT }
    }
}

impl MondoConfig {
    pub fn from_env_or_default() -> Self {
        let api_url = std::env::var("FLG_MONDO_API_URL").unwrap_or_else(|_| {
            info!("🏦️ FLG_MONDO_API_URL not set, using {DEFAULT_MONDO_API_URL}");
            DEFAULT_MONDO_API_URL.to_string()
        });
        let timeout = std::env::var("FLG_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("Invalid value for FLG_HTTP_TIMEOUT_SECS ({s}). {e}"))
                    .ok()
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);
        Self { api_url, timeout }
    }
}
