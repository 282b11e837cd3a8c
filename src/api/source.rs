//! The capabilities the resolution pipeline consumes from upstream providers.

use crate::error::Result;
use crate::models::{AqiReading, Coordinates, LocationQuery, SourceId};
use async_trait::async_trait;

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocode: Send + Sync {
    /// Fails only with `AppError::LocationNotFound`.
    async fn resolve(&self, location: &LocationQuery) -> Result<Coordinates>;
}

/// Everything a source may key its lookup on. Each source picks what it needs.
#[derive(Debug, Clone, Copy)]
pub struct SourceRequest<'a> {
    pub coordinates: Coordinates,
    pub location: &'a LocationQuery,
}

/// One upstream air quality provider.
#[async_trait]
pub trait AqiSource: Send + Sync {
    fn id(&self) -> SourceId;

    /// Fails only with `AppError::ProviderUnavailable` carrying `self.id()`.
    async fn fetch(&self, request: &SourceRequest<'_>) -> Result<AqiReading>;
}
