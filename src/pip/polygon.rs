use tracing::debug;

use super::point_in_ring;
use crate::models::{Coordinate, Polygon};

/// Inside the outer ring and not inside any hole.
///
/// A point on a hole's edge is inside that hole, so it is excluded from the
/// polygon. Polygons without an outer ring contain nothing.
pub fn point_in_polygon(px: f64, py: f64, polygon: &Polygon) -> bool {
    let Some(outer) = polygon.outer() else {
        return false;
    };

    if !point_in_ring(px, py, outer) {
        return false;
    }

    !polygon
        .holes()
        .iter()
        .any(|hole| point_in_ring(px, py, hole))
}

/// [`point_in_polygon`] for a coordinate in `(lat, lon)` order.
pub fn coordinate_in_polygon(coordinate: &Coordinate, polygon: &Polygon) -> bool {
    point_in_polygon(coordinate.lon(), coordinate.lat(), polygon)
}

/// [`point_in_polygon`] for serialized polygon text; unparsable text contains nothing.
pub fn point_in_polygon_str(px: f64, py: f64, text: &str) -> bool {
    match Polygon::from_json(text) {
        Ok(polygon) => point_in_polygon(px, py, &polygon),
        Err(e) => {
            debug!("Could not parse polygon text: {}", e);
            false
        }
    }
}
