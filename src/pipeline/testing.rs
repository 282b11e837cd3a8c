//! Scripted `Geocode` and `AqiSource` fakes that record how they were called.

use crate::api::{AqiSource, Geocode, SourceRequest};
use crate::error::{AppError, Result};
use crate::models::{AqiReading, Coordinates, LocationQuery, SourceId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared call log, in call order.
#[derive(Clone, Default)]
pub struct SourceCalls(Arc<Mutex<Vec<SourceId>>>);

impl SourceCalls {
    pub fn log(&self) -> Vec<SourceId> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, id: SourceId) {
        self.0.lock().unwrap().push(id);
    }
}

enum Behaviour {
    Fixed(f64, f64, f64),
    Fail(AppError),
    Panic,
    /// AQI looked up by location text; unknown locations fail.
    ByLocation(HashMap<String, f64>),
}

pub struct FakeSource {
    id: SourceId,
    behaviour: Behaviour,
    calls: SourceCalls,
}

impl FakeSource {
    pub fn ok(id: SourceId, aqi: f64, pm2_5: f64, pm10: f64, calls: &SourceCalls) -> Arc<dyn AqiSource> {
        Self::build(id, Behaviour::Fixed(aqi, pm2_5, pm10), calls)
    }

    pub fn failing(id: SourceId, calls: &SourceCalls) -> Arc<dyn AqiSource> {
        Self::build(id, Behaviour::Fail(AppError::provider(id, "timed out")), calls)
    }

    pub fn erroring(id: SourceId, error: AppError, calls: &SourceCalls) -> Arc<dyn AqiSource> {
        Self::build(id, Behaviour::Fail(error), calls)
    }

    pub fn panicking(id: SourceId, calls: &SourceCalls) -> Arc<dyn AqiSource> {
        Self::build(id, Behaviour::Panic, calls)
    }

    pub fn by_location(id: SourceId, table: &[(&str, f64)], calls: &SourceCalls) -> Arc<dyn AqiSource> {
        let table = table.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        Self::build(id, Behaviour::ByLocation(table), calls)
    }

    fn build(id: SourceId, behaviour: Behaviour, calls: &SourceCalls) -> Arc<dyn AqiSource> {
        Arc::new(Self {
            id,
            behaviour,
            calls: calls.clone(),
        })
    }
}

#[async_trait]
impl AqiSource for FakeSource {
    fn id(&self) -> SourceId {
        self.id
    }

    async fn fetch(&self, request: &SourceRequest<'_>) -> Result<AqiReading> {
        self.calls.record(self.id);
        tokio::task::yield_now().await;
        match &self.behaviour {
            Behaviour::Fixed(aqi, pm2_5, pm10) => AqiReading::new(self.id, *aqi, *pm2_5, *pm10),
            Behaviour::Fail(e) => Err(e.clone()),
            Behaviour::Panic => panic!("{} decoder crashed", self.id),
            Behaviour::ByLocation(table) => match table.get(request.location.as_str()) {
                Some(aqi) => AqiReading::new(self.id, *aqi, *aqi / 2.0, *aqi),
                None => Err(AppError::provider(self.id, "unknown station")),
            },
        }
    }
}

/// Geocoder answering from a fixed table.
pub struct FakeGeocoder {
    table: HashMap<String, Coordinates>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGeocoder {
    pub fn new(table: &[(&str, f64, f64)]) -> Self {
        Self {
            table: table
                .iter()
                .map(|(name, lat, lon)| (name.to_string(), Coordinates::new(*lat, *lon).unwrap()))
                .collect(),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocode for FakeGeocoder {
    async fn resolve(&self, location: &LocationQuery) -> Result<Coordinates> {
        self.calls.lock().unwrap().push(location.to_string());
        tokio::task::yield_now().await;
        self.table
            .get(location.as_str())
            .copied()
            .ok_or_else(|| AppError::LocationNotFound(location.to_string()))
    }
}
