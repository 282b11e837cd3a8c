//! Assembles the final report for one lookup.

use crate::models::{AqiReading, Coordinates, LocationQuery, ResolvedReport, RiskAssessment};
use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Assembles a report stamped with the current local time.
pub fn assemble(
    query: LocationQuery,
    coordinates: Coordinates,
    reading: AqiReading,
    assessment: RiskAssessment,
) -> ResolvedReport {
    assemble_at(query, coordinates, reading, assessment, Local::now())
}

/// Assembles a report stamped with `now`.
pub fn assemble_at(
    query: LocationQuery,
    coordinates: Coordinates,
    reading: AqiReading,
    assessment: RiskAssessment,
    now: DateTime<Local>,
) -> ResolvedReport {
    ResolvedReport {
        query,
        coordinates,
        reading,
        assessment,
        last_updated: now.format(TIMESTAMP_FORMAT).to_string(),
    }
}
