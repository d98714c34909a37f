use tracing::debug;

use crate::error::{GeoError, Result};
use crate::models::{Coordinate, Point};

/// Wrap a coordinate as a GeoJSON point. Axis order flips to `[lon, lat]`.
pub fn to_point(lat: f64, lon: f64) -> Point {
    Point::new(lon, lat)
}

/// Like [`to_point`], for numeric text such as form field values.
pub fn to_point_str(lat: &str, lon: &str) -> Option<Point> {
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(to_point(lat, lon))
}

pub fn try_from_point(point: &Point) -> Result<Coordinate> {
    let [lon, lat] = point.position().ok_or(GeoError::MissingCoordinates)?;
    Coordinate::new(lat, lon)
}

/// Inverse of [`to_point`]. `None` when coordinates are missing, short or out of range.
pub fn from_point(point: &Point) -> Option<Coordinate> {
    try_from_point(point).ok()
}

pub fn from_point_to_string(point: &Point) -> Option<String> {
    from_point(point).map(|c| c.to_string())
}

/// Parse a serialized point first, then convert it.
pub fn from_point_str(text: &str) -> Option<Coordinate> {
    match Point::from_json(text) {
        Ok(point) => from_point(&point),
        Err(e) => {
            debug!("Could not parse point text: {}", e);
            None
        }
    }
}
