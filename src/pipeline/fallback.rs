//! Ordered fallback across air quality sources.
//!
//! Sources are tried strictly one after another, each exactly once, stopping at
//! the first reading. No source is ever raced against another.

use crate::api::{AqiSource, SourceRequest};
use crate::error::{AppError, Result};
use crate::models::{AqiReading, Coordinates, LocationQuery, SourceId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One source attempt and, if it failed, why.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub source: SourceId,
    pub error: Option<AppError>,
}

/// Terminal state of a chain run: the reading (`Done`) or the collapsed failure (`Failed`),
/// plus the trail of attempts that led there.
#[derive(Debug, Clone)]
pub struct FallbackOutcome {
    pub result: Result<AqiReading>,
    pub attempts: Vec<Attempt>,
}

/// Static provider-priority policy: an ordered list of sources.
#[derive(Clone)]
pub struct SourceChain {
    sources: Vec<Arc<dyn AqiSource>>,
}

impl SourceChain {
    /// Builds a chain tried in the given order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `sources` is empty.
    pub fn new(sources: Vec<Arc<dyn AqiSource>>) -> Result<Self> {
        if sources.is_empty() {
            return Err(AppError::Config(
                "at least one AQI source is required".to_string(),
            ));
        }
        Ok(Self { sources })
    }

    /// Source identifiers in priority order.
    pub fn order(&self) -> Vec<SourceId> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Tries each source in order and records every attempt.
    pub async fn run(&self, request: &SourceRequest<'_>) -> FallbackOutcome {
        let mut attempts = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let id = source.id();
            match source.fetch(request).await {
                Ok(reading) => {
                    info!("{} delivered AQI {} for '{}'", id, reading.aqi, request.location);
                    attempts.push(Attempt {
                        source: id,
                        error: None,
                    });
                    return FallbackOutcome {
                        result: Ok(reading),
                        attempts,
                    };
                },
                Err(e) => {
                    warn!("{} failed for '{}': {}. Falling back.", id, request.location, e);
                    attempts.push(Attempt {
                        source: id,
                        error: Some(e),
                    });
                },
            }
        }

        // Construction guarantees at least one attempt.
        let last = attempts.last().map_or(SourceId::Waqi, |a| a.source);
        FallbackOutcome {
            result: Err(AppError::provider(
                last,
                format!("all {} sources failed", attempts.len()),
            )),
            attempts,
        }
    }

    /// Resolves a reading for one lookup, failing only with `ProviderUnavailable`.
    pub async fn resolve_aqi(
        &self,
        coordinates: Coordinates,
        location: &LocationQuery,
    ) -> Result<AqiReading> {
        let request = SourceRequest {
            coordinates,
            location,
        };
        let outcome = self.run(&request).await;
        let trail: Vec<String> = outcome
            .attempts
            .iter()
            .map(|a| match &a.error {
                None => format!("{} ok", a.source),
                Some(e) => format!("{} failed ({})", a.source, e),
            })
            .collect();
        debug!("AQI attempts for '{}': {}", location, trail.join(" -> "));
        outcome.result
    }
}
