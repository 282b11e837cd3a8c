//! Provides the secondary air quality source: the World Air Quality Index city feed.

use super::http::{client_with_timeout, get_json};
use super::source::{AqiSource, SourceRequest};
use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::models::{AqiReading, LocationQuery, SourceId, WaqiData, WaqiIndex, WaqiResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{info, warn};

/// City-keyed source reporting a 0-500 index.
pub struct WaqiSource {
    client: Client,
    token: String,
    base_url: String,
}

impl WaqiSource {
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            token: config.key.clone(),
            base_url: config.url.clone(),
        })
    }

    /// `{base}/{city}/` with the city as a single escaped path segment.
    fn feed_url(&self, location: &LocationQuery) -> Result<Url> {
        let unavailable = |reason: &str| AppError::provider(SourceId::Waqi, reason);
        let mut url = Url::parse(&self.base_url).map_err(|_| unavailable("invalid feed URL"))?;
        url.path_segments_mut()
            .map_err(|_| unavailable("feed URL cannot carry a path"))?
            .pop_if_empty()
            .push(location.as_str())
            .push("");
        Ok(url)
    }

    /// Fetches the current city-level reading for `location`.
    pub async fn current(&self, location: &LocationQuery) -> Result<AqiReading> {
        info!("Fetching WAQI AQI for '{}'", location);

        let request = self
            .client
            .get(self.feed_url(location)?)
            .query(&[("token", self.token.as_str())]);
        let response: WaqiResponse = get_json(request, "WAQI")
            .await
            .map_err(|e| AppError::provider(SourceId::Waqi, e.to_string()))?;

        if response.status != "ok" {
            warn!("WAQI status '{}' for '{}': {:?}", response.status, location, response.data);
            return Err(AppError::provider(
                SourceId::Waqi,
                format!("status '{}'", response.status),
            ));
        }

        let data: WaqiData = response
            .data
            .ok_or_else(|| AppError::provider(SourceId::Waqi, "missing data"))
            .and_then(|raw| {
                serde_json::from_value(raw)
                    .map_err(|e| AppError::provider(SourceId::Waqi, format!("malformed data: {}", e)))
            })?;

        let aqi = match data.aqi {
            WaqiIndex::Value(aqi) => aqi,
            WaqiIndex::Text(text) => {
                warn!("WAQI has no current index for '{}' (got '{}')", location, text);
                return Err(AppError::provider(SourceId::Waqi, "no current index"));
            },
        };

        AqiReading::new(
            SourceId::Waqi,
            aqi,
            data.iaqi.pm25.and_then(|p| p.v).unwrap_or(0.0),
            data.iaqi.pm10.and_then(|p| p.v).unwrap_or(0.0),
        )
    }
}

#[async_trait]
impl AqiSource for WaqiSource {
    fn id(&self) -> SourceId {
        SourceId::Waqi
    }

    async fn fetch(&self, request: &SourceRequest<'_>) -> Result<AqiReading> {
        self.current(request.location).await
    }
}
