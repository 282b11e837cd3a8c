//! Domain records for a single air quality lookup.
//!
//! Includes structs for:
//! - The validated input (`LocationQuery`) and its geocoded `Coordinates`.
//! - A normalized reading from one provider (`AqiReading`, tagged with its `SourceId`).
//! - The derived `RiskAssessment` and the final `ResolvedReport` returned to callers.
//!
//! None of these outlive the request that created them.

use crate::error::{AppError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A non-empty, trimmed place name as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Trims `raw` and rejects it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "location must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting values outside the WGS84 ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::Validation(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::Validation(format!(
                "longitude {} out of range",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Identifies which upstream provider produced a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceId {
    /// OpenWeatherMap air pollution API, keyed by coordinates.
    OpenWeather,
    /// World Air Quality Index feed, keyed by city name.
    Waqi,
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::OpenWeather => write!(f, "OpenWeather"),
            SourceId::Waqi => write!(f, "WAQI"),
        }
    }
}

/// A normalized air quality reading.
///
/// `aqi` is forwarded on whatever scale the provider reports: OpenWeather uses a
/// 1-5 ordinal index, WAQI the 0-500 US EPA style index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiReading {
    pub aqi: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    pub source: SourceId,
}

impl AqiReading {
    /// Creates a reading, rejecting negative or non-finite values as a provider failure.
    pub fn new(source: SourceId, aqi: f64, pm2_5: f64, pm10: f64) -> Result<Self> {
        for (field, value) in [("aqi", aqi), ("pm2_5", pm2_5), ("pm10", pm10)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::provider(
                    source,
                    format!("invalid {} value {}", field, value),
                ));
            }
        }
        Ok(Self {
            aqi,
            pm2_5,
            pm10,
            source,
        })
    }
}

/// Respiratory risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub message: &'static str,
}

/// The record handed back to a caller for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReport {
    pub query: LocationQuery,
    pub coordinates: Coordinates,
    pub reading: AqiReading,
    pub assessment: RiskAssessment,
    /// Local time of assembly, `DD/MM/YYYY HH:MM`.
    pub last_updated: String,
}

/// Whole-number indices go out as integers (`2`, not `2.0`).
fn serialize_index<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Flat wire shape consumed by the dashboard.
#[derive(Serialize)]
struct WireReport<'a> {
    city: &'a str,
    latitude: f64,
    longitude: f64,
    #[serde(serialize_with = "serialize_index")]
    aqi: f64,
    pm2_5: f64,
    pm10: f64,
    risk: RiskLevel,
    message: &'a str,
    last_updated: &'a str,
}

impl Serialize for ResolvedReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        WireReport {
            city: self.query.as_str(),
            latitude: self.coordinates.latitude,
            longitude: self.coordinates.longitude,
            aqi: self.reading.aqi,
            pm2_5: self.reading.pm2_5,
            pm10: self.reading.pm10,
            risk: self.assessment.level,
            message: self.assessment.message,
            last_updated: &self.last_updated,
        }
        .serialize(serializer)
    }
}
