//! Provides clients and utilities for interacting with external APIs.
//!
//! Includes:
//! - `geocoder`: OpenCage client that turns a place name into coordinates.
//! - `source`: the `AqiSource` capability shared by all air quality providers.
//! - `openweather`: primary source, keyed by coordinates.
//! - `waqi`: secondary source, keyed by the location text.

mod geocoder;
mod http;
mod openweather;
mod source;
mod waqi;


pub use geocoder::*;
pub use openweather::*;
pub use source::*;
pub use waqi::*;
