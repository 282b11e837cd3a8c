//! Deserialization targets for the third-party provider payloads.
//!
//! Only the fields the pipeline actually reads are modelled; everything else in
//! the responses is ignored by serde.

use serde::{Deserialize, Serialize};

// --- OpenCage geocoding ---

/// Response of the OpenCage `/geocode/v1/json` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenCageResponse {
    #[serde(default)]
    pub results: Vec<OpenCageCandidate>,
}

/// One candidate match, best first.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenCageCandidate {
    pub geometry: OpenCageGeometry,
    pub formatted: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenCageGeometry {
    pub lat: f64,
    pub lng: f64,
}

// --- OpenWeatherMap air pollution ---

/// Response of the OpenWeatherMap `/data/2.5/air_pollution` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenWeatherResponse {
    pub list: Option<Vec<OpenWeatherEntry>>,
}

/// A single timestamped reading.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenWeatherEntry {
    pub dt: Option<i64>, // Unix seconds
    pub main: OpenWeatherMain,
    #[serde(default)]
    pub components: OpenWeatherComponents,
}

/// Categorical index, 1 (good) to 5 (very poor).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenWeatherMain {
    pub aqi: f64,
}

/// Pollutant concentrations in µg/m³. Missing entries read as zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OpenWeatherComponents {
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
}

// --- WAQI city feed ---

/// Envelope of the WAQI `/feed/{city}/` endpoint.
///
/// On `"ok"` the `data` field holds a [`WaqiData`] object; on `"error"` it holds
/// a plain message string, so it is kept untyped until the status is checked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WaqiResponse {
    pub status: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WaqiData {
    pub aqi: WaqiIndex,
    #[serde(default)]
    pub iaqi: WaqiIndividual,
}

/// WAQI reports `"-"` instead of a number when a station has no current data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WaqiIndex {
    Value(f64),
    Text(String),
}

/// Per-pollutant sub-indices.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WaqiIndividual {
    pub pm25: Option<WaqiPollutant>,
    pub pm10: Option<WaqiPollutant>,
}

/// A pollutant entry; `v` may be absent, which reads as zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WaqiPollutant {
    #[serde(default)]
    pub v: Option<f64>,
}
