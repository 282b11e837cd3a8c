//! Provides the primary air quality source: the OpenWeatherMap air pollution API.

use super::http::{client_with_timeout, get_json};
use super::source::{AqiSource, SourceRequest};
use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::models::{AqiReading, Coordinates, OpenWeatherResponse, SourceId};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Coordinate-keyed source reporting a 1-5 categorical AQI.
pub struct OpenWeatherSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherSource {
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            api_key: config.key.clone(),
            base_url: config.url.clone(),
        })
    }

    /// Fetches the current reading for `coordinates`.
    pub async fn current(&self, coordinates: Coordinates) -> Result<AqiReading> {
        info!("Fetching OpenWeather AQI for {}", coordinates);

        let request = self.client.get(&self.base_url).query(&[
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("appid", self.api_key.clone()),
        ]);
        let response: OpenWeatherResponse = get_json(request, "OpenWeather")
            .await
            .map_err(|e| AppError::provider(SourceId::OpenWeather, e.to_string()))?;

        let entry = response
            .list
            .and_then(|list| list.into_iter().next())
            .ok_or_else(|| {
                warn!("OpenWeather returned no AQI entries for {}", coordinates);
                AppError::provider(SourceId::OpenWeather, "no AQI data")
            })?;
        debug!("OpenWeather entry timestamp: {:?}", entry.dt);

        AqiReading::new(
            SourceId::OpenWeather,
            entry.main.aqi,
            entry.components.pm2_5.unwrap_or(0.0),
            entry.components.pm10.unwrap_or(0.0),
        )
    }
}

#[async_trait]
impl AqiSource for OpenWeatherSource {
    fn id(&self) -> SourceId {
        SourceId::OpenWeather
    }

    async fn fetch(&self, request: &SourceRequest<'_>) -> Result<AqiReading> {
        self.current(request.coordinates).await
    }
}
