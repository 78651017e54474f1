use std::env;

use flg_common::Secret;
use log::*;
use mondo_tools::MondoConfig;
use uber_tools::UberConfig;

const DEFAULT_FLG_HOST: &str = "127.0.0.1";
const DEFAULT_FLG_PORT: u16 = 8370;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The public base URL of this deployment, e.g. `https://flg.example.com`. Both the OAuth
    /// redirect and the webhook URLs are derived from it, so it must be reachable by the
    /// providers.
    pub public_url: String,
    /// API key for the static-map image service used on receipt feed items.
    pub maps_api_key: Secret<String>,
    pub uber: UberConfig,
    pub mondo: MondoConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_FLG_HOST.to_string(),
            port: DEFAULT_FLG_PORT,
            public_url: format!("http://{DEFAULT_FLG_HOST}:{DEFAULT_FLG_PORT}"),
            maps_api_key: Secret::default(),
            uber: UberConfig::default(),
            mondo: MondoConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("FLG_HOST").ok().unwrap_or_else(|| DEFAULT_FLG_HOST.into());
        let port = env::var("FLG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for FLG_PORT. {e} Using the default, {DEFAULT_FLG_PORT}, instead.");
                    DEFAULT_FLG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_FLG_PORT);
        let public_url = env::var("FLG_PUBLIC_URL").ok().unwrap_or_else(|| {
            error!(
                "🪛️ FLG_PUBLIC_URL is not set. OAuth redirects and webhook registrations will point at a local \
                 address that the providers cannot reach."
            );
            format!("http://{host}:{port}")
        });
        let maps_api_key = Secret::new(env::var("FLG_MAPS_API_KEY").ok().unwrap_or_else(|| {
            warn!("🪛️ FLG_MAPS_API_KEY is not set. Receipt map images will be rejected by the map service.");
            String::default()
        }));
        let uber = UberConfig::from_env_or_default();
        let mondo = MondoConfig::from_env_or_default();
        Self { host, port, public_url, maps_api_key, uber, mondo }
    }
}
