//! Coordinate text codec.
//!
//! Parses free-form `"lat,lon"` / `"lat;lon"` text, renders coordinates back
//! to fixed-point text and performs the stricter pattern check used by form
//! validation.

mod fixed;

pub use fixed::{to_fixed, DEFAULT_DECIMALS};

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{GeoError, Result};
use crate::models::Coordinate;

static CHECK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[-+]?([1-8]?\d(\.\d+)?|90(\.0+)?),\s*[-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?)$",
    )
    .expect("coordinate check pattern is valid")
});

/// Parse `"lat,lon"` or `"lat;lon"`, tolerating whitespace around either part.
pub fn try_parse(text: &str) -> Result<Coordinate> {
    let invalid = || GeoError::InvalidCoordinateText(text.to_string());

    let mut parts = text.split(|c: char| c == ',' || c == ';');
    let (lat, lon) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => (lat.trim(), lon.trim()),
        _ => return Err(invalid()),
    };
    if lat.is_empty() || lon.is_empty() {
        return Err(invalid());
    }

    let lat = parse_component(lat)?;
    let lon = parse_component(lon)?;
    Coordinate::new(lat, lon)
}

fn parse_component(text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| GeoError::InvalidCoordinateText(text.to_string()))?;
    if !value.is_finite() {
        return Err(GeoError::NonFiniteNumber(text.to_string()));
    }
    Ok(value)
}

/// Parse coordinate text, returning `None` for anything malformed or out of range.
pub fn parse(text: &str) -> Option<Coordinate> {
    try_parse(text).ok()
}

/// Parse coordinate text and return its canonical `"lat,lon"` form.
pub fn parse_to_string(text: &str) -> Option<String> {
    parse(text).map(|c| c.to_string())
}

/// Render `"{lat},{lon}"` with `decimals` fraction digits on each side.
pub fn format(lat: f64, lon: f64, decimals: usize) -> String {
    format!("{},{}", to_fixed(lat, decimals), to_fixed(lon, decimals))
}

pub fn format_coordinate(coordinate: &Coordinate, decimals: usize) -> String {
    format(coordinate.lat(), coordinate.lon(), decimals)
}

/// Strict pattern check: comma separated, in range, no semicolon form.
pub fn check(text: &str) -> bool {
    CHECK_PATTERN.is_match(text)
}
