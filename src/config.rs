//! Runtime configuration loaded from the environment (and an optional `.env` file).
//!
//! Provider credentials are never compiled in; they must be supplied through
//! `OPENCAGE_API_KEY`, `OPENWEATHER_API_KEY` and `WAQI_TOKEN`.

use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;
use tracing::error;

pub const DEFAULT_GEOCODE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
pub const DEFAULT_OPENWEATHER_AQI_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";
pub const DEFAULT_WAQI_FEED_URL: &str = "https://api.waqi.info/feed";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Endpoint and credentials for one upstream provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub url: String,
    pub key: String,
}

/// Everything needed to build the resolution pipeline and the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    pub geocoder: ProviderConfig,
    pub openweather: ProviderConfig,
    pub waqi: ProviderConfig,
    /// Applied independently to every outbound call.
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds a configuration with default endpoints and the given credentials.
    pub fn new(opencage_key: String, openweather_key: String, waqi_token: String) -> Self {
        Self {
            geocoder: ProviderConfig {
                url: DEFAULT_GEOCODE_URL.to_string(),
                key: opencage_key,
            },
            openweather: ProviderConfig {
                url: DEFAULT_OPENWEATHER_AQI_URL.to_string(),
                key: openweather_key,
            },
            waqi: ProviderConfig {
                url: DEFAULT_WAQI_FEED_URL.to_string(),
                key: waqi_token,
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Env` if a credential is missing and `AppError::Config`
    /// if a numeric setting cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::new(
            required("OPENCAGE_API_KEY")?,
            required("OPENWEATHER_API_KEY")?,
            required("WAQI_TOKEN")?,
        );

        if let Ok(url) = env::var("GEOCODE_URL") {
            config.geocoder.url = url;
        }
        if let Ok(url) = env::var("OPENWEATHER_AQI_URL") {
            config.openweather.url = url;
        }
        if let Ok(url) = env::var("WAQI_FEED_URL") {
            config.waqi.url = url;
        }
        if let Ok(raw) = env::var("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("UPSTREAM_TIMEOUT_SECS must be a positive integer, got '{}'", raw))
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(raw) = env::var("PORT") {
            config.port = raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a valid port number, got '{}'", raw)))?;
        }

        Ok(config)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|e| {
        error!("{} environment variable not set: {}", name, e);
        AppError::Env(e)
    })
}
