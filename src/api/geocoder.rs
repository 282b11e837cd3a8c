//! Provides a client for the OpenCage forward geocoding API.

use super::http::{client_with_timeout, get_json};
use super::source::Geocode;
use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, LocationQuery, OpenCageResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info, warn};

/// Geocoder backed by OpenCage. The first candidate returned is taken as authoritative.
pub struct OpenCageGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenCageGeocoder {
    /// Creates a geocoder for the configured endpoint, bounding every call by `timeout`.
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: client_with_timeout(timeout)?,
            api_key: config.key.clone(),
            base_url: config.url.clone(),
        })
    }

    async fn lookup(&self, location: &LocationQuery) -> Result<OpenCageResponse> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("q", location.as_str()), ("key", self.api_key.as_str())]);
        get_json(request, "OpenCage").await
    }
}

#[async_trait]
impl Geocode for OpenCageGeocoder {
    async fn resolve(&self, location: &LocationQuery) -> Result<Coordinates> {
        info!("Geocoding location: {}", location);

        // Unreachable, timed out and malformed all look the same to the caller.
        let response = self.lookup(location).await.map_err(|e| {
            error!("Geocoding error for '{}': {}", location, e);
            AppError::LocationNotFound(location.to_string())
        })?;

        let candidate = response.results.into_iter().next().ok_or_else(|| {
            warn!("Geocoder returned no candidates for '{}'", location);
            AppError::LocationNotFound(location.to_string())
        })?;

        let coordinates = Coordinates::new(candidate.geometry.lat, candidate.geometry.lng)
            .map_err(|e| {
                error!("Geocoder returned unusable coordinates for '{}': {}", location, e);
                AppError::LocationNotFound(location.to_string())
            })?;

        info!(
            "Resolved '{}' to {} ({})",
            location,
            coordinates,
            candidate.formatted.as_deref().unwrap_or("no display name")
        );
        Ok(coordinates)
    }
}
