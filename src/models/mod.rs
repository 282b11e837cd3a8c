//! Defines the data structures and models used throughout the application.
//!
//! `air_quality` holds the per-request domain records produced by the resolution
//! pipeline; `upstream` holds the wire payloads of the third-party providers.

mod air_quality;
mod upstream;

pub use air_quality::*;
pub use upstream::*;
