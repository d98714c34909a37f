use geo::{BoundingRect, MultiPoint, Rect};

use crate::models::Geometry;

/// Flatten points and polygons into `[lat, lon]` pairs in encounter order.
///
/// A point contributes one pair (points with short coordinates contribute
/// none); a polygon contributes every vertex of every ring, holes included.
/// Pairs are transposed only, never range checked.
pub fn all_lat_longs(geometries: &[Geometry]) -> Vec<[f64; 2]> {
    let mut out = Vec::new();
    for geometry in geometries {
        match geometry {
            Geometry::Point(point) => {
                if let Some([lon, lat]) = point.position() {
                    out.push([lat, lon]);
                }
            }
            Geometry::Polygon(polygon) => {
                for ring in &polygon.coordinates {
                    out.extend(ring.iter().map(|&[lon, lat]| [lat, lon]));
                }
            }
        }
    }
    out
}

/// Bounding rectangle (x = lon, y = lat) around every flattened vertex.
pub fn bounds(geometries: &[Geometry]) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = all_lat_longs(geometries)
        .into_iter()
        .map(|[lat, lon]| geo::Point::new(lon, lat))
        .collect();
    points.bounding_rect()
}
