//! Latitude/longitude pair in the internal (lat first) axis order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GeoError, Result};

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A validated WGS84 coordinate.
///
/// Both components are finite and within range; the only way to build one is
/// through [`Coordinate::new`], which enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GeoError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() {
            return Err(GeoError::NonFiniteNumber(lat.to_string()));
        }
        if !lon.is_finite() {
            return Err(GeoError::NonFiniteNumber(lon.to_string()));
        }
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Interchange position, longitude first.
    pub fn to_position(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Renders the canonical `"lat,lon"` text.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
