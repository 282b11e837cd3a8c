//! The resolution pipeline: location text in, risk-classified report out.
//!
//! Steps run strictly in sequence for one lookup (validate, geocode, fetch AQI
//! through the fallback chain, classify, assemble). The service holds no mutable
//! state, so concurrent lookups need no coordination.

mod fallback;
mod report;
mod risk;

#[cfg(test)]
pub(crate) mod testing;

pub use fallback::*;
pub use report::*;
pub use risk::*;

use crate::api::{AqiSource, Geocode, OpenCageGeocoder, OpenWeatherSource, WaqiSource};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{LocationQuery, ResolvedReport};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Answers "what is the air quality and respiratory risk at this place?".
#[derive(Clone)]
pub struct AirQualityService {
    geocoder: Arc<dyn Geocode>,
    chain: SourceChain,
}

impl AirQualityService {
    pub fn new(geocoder: Arc<dyn Geocode>, chain: SourceChain) -> Self {
        Self { geocoder, chain }
    }

    /// Wires OpenCage geocoding with OpenWeather as primary and WAQI as secondary source.
    pub fn from_config(config: &Config) -> Result<Self> {
        let geocoder = OpenCageGeocoder::new(&config.geocoder, config.timeout)?;
        let sources: Vec<Arc<dyn AqiSource>> = vec![
            Arc::new(OpenWeatherSource::new(&config.openweather, config.timeout)?),
            Arc::new(WaqiSource::new(&config.waqi, config.timeout)?),
        ];
        let chain = SourceChain::new(sources)?;
        info!("AQI source order: {:?}", chain.order());
        Ok(Self::new(Arc::new(geocoder), chain))
    }

    /// Resolves one free-text location into a report.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` for empty input (nothing is called upstream).
    /// - `AppError::LocationNotFound` if geocoding fails in any way (no AQI source is called).
    /// - `AppError::ProviderUnavailable` if every AQI source fails.
    pub async fn resolve(&self, raw_location: &str) -> Result<ResolvedReport> {
        let query = LocationQuery::parse(raw_location).map_err(|e| {
            error!("Rejected lookup: {}", e);
            e
        })?;

        let coordinates = self.geocoder.resolve(&query).await.map_err(|e| match e {
            AppError::LocationNotFound(_) => e,
            other => {
                error!("Geocoding stage failed for '{}': {}", query, other);
                AppError::LocationNotFound(query.to_string())
            },
        })?;

        let reading = self.chain.resolve_aqi(coordinates, &query).await.map_err(|e| {
            error!("AQI stage failed for '{}': {}", query, e);
            e
        })?;

        let assessment = classify(reading.aqi);
        debug!(
            "'{}' classified {} (AQI {} from {})",
            query, assessment.level, reading.aqi, reading.source
        );

        Ok(assemble(query, coordinates, reading, assessment))
    }

    /// Runs [`resolve`](Self::resolve) on its own task so a panic anywhere in the
    /// lookup fails only this request, as `AppError::Unexpected`.
    pub async fn resolve_isolated(&self, raw_location: String) -> Result<ResolvedReport> {
        let service = self.clone();
        tokio::spawn(async move { service.resolve(&raw_location).await })
            .await
            .map_err(|e| {
                error!("Lookup task aborted: {}", e);
                AppError::Unexpected(format!("lookup task aborted: {}", e))
            })?
    }
}
