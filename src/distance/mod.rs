//! Great-circle distances on a spherical Earth.

use crate::models::Coordinate;

/// Mean Earth radius used by every distance in this crate, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two `(lat, lon)` points in degrees.
///
/// Coincident inputs give exactly `0.0`, and swapping the two points gives
/// a bit-identical result.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_M * 2.0 * a.sqrt().min(1.0).asin()
}

pub fn haversine_between(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine(a.lat(), a.lon(), b.lat(), b.lon())
}

/// Candidate indices with their distance from `origin`, nearest first.
///
/// Ties keep their input order.
pub fn rank_by_distance(origin: &Coordinate, candidates: &[Coordinate]) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| (i, haversine_between(origin, c)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}
