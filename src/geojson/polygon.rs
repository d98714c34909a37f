use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::models::{Coordinate, Polygon, Ring};

/// Input to [`polygon_from_rings`]: one ring or several.
#[derive(Debug, Clone, PartialEq)]
pub enum LatLngRings {
    Single(Vec<Coordinate>),
    Multi(Vec<Vec<Coordinate>>),
}

impl From<Vec<Coordinate>> for LatLngRings {
    fn from(ring: Vec<Coordinate>) -> Self {
        LatLngRings::Single(ring)
    }
}

impl From<Vec<Vec<Coordinate>>> for LatLngRings {
    fn from(rings: Vec<Vec<Coordinate>>) -> Self {
        LatLngRings::Multi(rings)
    }
}

/// Human-readable summary of a polygon for UI labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolygonDescription {
    pub label: String,
    pub title: String,
}

fn close_ring(mut ring: Ring) -> Ring {
    if let Some(&first) = ring.first() {
        if ring.last() != Some(&first) {
            ring.push(first);
        }
    }
    ring
}

/// Build a polygon from lat/lon rings, flipping to `[lon, lat]` and closing
/// every ring that is left open. The result is always ring-of-rings shaped.
pub fn polygon_from_rings(rings: impl Into<LatLngRings>) -> Polygon {
    let rings = match rings.into() {
        LatLngRings::Single(ring) => vec![ring],
        LatLngRings::Multi(rings) => rings,
    };

    let rings = rings
        .into_iter()
        .map(|ring| close_ring(ring.iter().map(Coordinate::to_position).collect()))
        .collect();

    Polygon::new(rings)
}

fn parse_polygon(text: &str) -> Option<Polygon> {
    Polygon::from_json(text)
        .map_err(|e| debug!("Could not parse polygon text: {}", e))
        .ok()
}

/// First vertex of the outer ring.
///
/// Functions returning a [`Coordinate`] validate the vertex and give `None`
/// when it is out of range. Functions returning raw `[lat, lon]` pairs
/// ([`to_lat_lng_rings`], [`super::all_lat_longs`]) only transpose and pass
/// vertices through unchecked.
pub fn polygon_start_coordinate(polygon: &Polygon) -> Option<Coordinate> {
    let [lon, lat] = *polygon.outer()?.first()?;
    Coordinate::new(lat, lon).ok()
}

pub fn polygon_start_coordinate_to_string(polygon: &Polygon) -> Option<String> {
    polygon_start_coordinate(polygon).map(|c| c.to_string())
}

/// [`polygon_start_coordinate`] for serialized polygon text.
pub fn polygon_start_coordinate_str(text: &str) -> Option<Coordinate> {
    polygon_start_coordinate(&parse_polygon(text)?)
}

/// Vertices of the outer ring, not counting the repeated closing vertex.
fn vertex_count(polygon: &Polygon) -> usize {
    match polygon.outer() {
        Some(ring) if ring.len() > 1 && ring.first() == ring.last() => ring.len() - 1,
        Some(ring) => ring.len(),
        None => 0,
    }
}

pub fn describe_polygon(polygon: &Polygon) -> PolygonDescription {
    let count = vertex_count(polygon);
    if count == 0 {
        return PolygonDescription {
            label: "Polygon (empty)".to_string(),
            title: "No vertices".to_string(),
        };
    }

    let noun = if count == 1 { "vertex" } else { "vertices" };
    let title = match polygon.outer().and_then(|ring| ring.first()) {
        Some(&[lon, lat]) => format!(
            "{} {}, starting at {}",
            count,
            noun,
            codec::format(lat, lon, codec::DEFAULT_DECIMALS)
        ),
        None => format!("{} {}", count, noun),
    };

    PolygonDescription {
        label: format!("Polygon of {} {}", count, noun),
        title,
    }
}

/// Describe serialized polygon text. Unparsable text describes as empty.
pub fn describe_polygon_str(text: &str) -> PolygonDescription {
    let polygon = Polygon::from_json(text).unwrap_or_else(|e| {
        debug!("Describing unparsable polygon text as empty: {}", e);
        Polygon::default()
    });
    describe_polygon(&polygon)
}

/// Every ring transposed back to `[lat, lon]` for map widgets.
///
/// `None` when the polygon has no rings or an empty outer ring; callers use
/// this as the validity check before drawing. Vertices are not range checked.
pub fn to_lat_lng_rings(polygon: &Polygon) -> Option<Vec<Vec<[f64; 2]>>> {
    polygon.outer()?;
    Some(
        polygon
            .coordinates
            .iter()
            .map(|ring| ring.iter().map(|&[lon, lat]| [lat, lon]).collect())
            .collect(),
    )
}

/// [`to_lat_lng_rings`] for serialized polygon text; unparsable text gives `None`.
pub fn to_lat_lng_rings_str(text: &str) -> Option<Vec<Vec<[f64; 2]>>> {
    to_lat_lng_rings(&parse_polygon(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn square() -> Vec<Coordinate> {
        vec![c(48.8, 2.3), c(48.8, 2.4), c(48.9, 2.4), c(48.9, 2.3)]
    }

    #[test]
    fn test_single_ring_is_closed_and_flipped() {
        let polygon = polygon_from_rings(square());
        assert_eq!(polygon.coordinates.len(), 1);
        let ring = &polygon.coordinates[0];
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], [2.3, 48.8]);
        assert_eq!(ring[4], ring[0]);
    }

    #[test]
    fn test_closed_ring_not_closed_twice() {
        let mut ring = square();
        ring.push(ring[0]);
        let polygon = polygon_from_rings(ring);
        assert_eq!(polygon.coordinates[0].len(), 5);
    }

    #[test]
    fn test_multiple_rings() {
        let hole = vec![c(48.84, 2.34), c(48.84, 2.36), c(48.86, 2.36)];
        let polygon = polygon_from_rings(vec![square(), hole]);
        assert_eq!(polygon.coordinates.len(), 2);
        assert_eq!(polygon.coordinates[1].len(), 4);
        assert_eq!(polygon.holes().len(), 1);
    }

    #[test]
    fn test_empty_ring_stays_empty() {
        let polygon = polygon_from_rings(Vec::<Coordinate>::new());
        assert_eq!(polygon.coordinates, vec![Vec::<Position>::new()]);
        assert!(polygon.is_empty());
    }

    #[test]
    fn test_start_coordinate() {
        let polygon = polygon_from_rings(square());
        let start = polygon_start_coordinate(&polygon).unwrap();
        assert_eq!((start.lat(), start.lon()), (48.8, 2.3));
        assert_eq!(
            polygon_start_coordinate_to_string(&polygon).as_deref(),
            Some("48.8,2.3")
        );
        assert!(polygon_start_coordinate(&Polygon::default()).is_none());
        assert!(polygon_start_coordinate(&Polygon::new(vec![vec![]])).is_none());
    }

    #[test]
    fn test_start_coordinate_str() {
        let text = r#"{"type":"Polygon","coordinates":[[[2.3,48.8],[2.4,48.8],[2.4,48.9],[2.3,48.8]]]}"#;
        let start = polygon_start_coordinate_str(text).unwrap();
        assert_eq!((start.lat(), start.lon()), (48.8, 2.3));
        assert!(polygon_start_coordinate_str("{broken").is_none());
        assert!(polygon_start_coordinate_str(r#"{"type":"Polygon","coordinates":[]}"#).is_none());
    }

    #[test]
    fn test_out_of_range_vertex_policy() {
        let polygon = Polygon::new(vec![vec![[200.0, 48.8], [2.4, 48.8], [2.4, 48.9], [200.0, 48.8]]]);
        assert!(polygon_start_coordinate(&polygon).is_none());
        let rings = to_lat_lng_rings(&polygon).unwrap();
        assert_eq!(rings[0][0], [48.8, 200.0]);
    }

    #[test]
    fn test_describe_counts_outer_vertices() {
        let description = describe_polygon(&polygon_from_rings(square()));
        assert_eq!(description.label, "Polygon of 4 vertices");
        assert_eq!(description.title, "4 vertices, starting at 48.800000,2.300000");
    }

    #[test]
    fn test_describe_empty_and_garbage() {
        let empty = describe_polygon(&Polygon::default());
        assert_eq!(empty.label, "Polygon (empty)");
        assert_eq!(describe_polygon_str("{not json"), empty);
        assert_eq!(
            describe_polygon_str(r#"{"type":"Point","coordinates":[1,2]}"#),
            empty
        );
    }

    #[test]
    fn test_describe_single_vertex() {
        let polygon = Polygon::new(vec![vec![[1.0, 2.0]]]);
        assert_eq!(describe_polygon(&polygon).label, "Polygon of 1 vertex");
    }

    #[test]
    fn test_describe_text() {
        let text = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#;
        assert_eq!(describe_polygon_str(text).label, "Polygon of 3 vertices");
    }

    #[test]
    fn test_describe_text_with_altitude() {
        let text = r#"{"type":"Polygon","coordinates":[[[2.3,48.8,35],[2.4,48.8,35],[2.4,48.9,35],[2.3,48.9,35],[2.3,48.8,35]]]}"#;
        let description = describe_polygon_str(text);
        assert_eq!(description.label, "Polygon of 4 vertices");
        assert_eq!(description.title, "4 vertices, starting at 48.800000,2.300000");
    }

    #[test]
    fn test_to_lat_lng_rings_str() {
        let text = r#"{"type":"Polygon","coordinates":[[[2.3,48.8,35],[2.4,48.8,35],[2.4,48.9,35],[2.3,48.8,35]]]}"#;
        let rings = to_lat_lng_rings_str(text).unwrap();
        assert_eq!(rings, vec![vec![[48.8, 2.3], [48.8, 2.4], [48.9, 2.4], [48.8, 2.3]]]);
        assert!(to_lat_lng_rings_str("not json").is_none());
        assert!(to_lat_lng_rings_str(r#"{"type":"Polygon","coordinates":[[]]}"#).is_none());
    }

    #[test]
    fn test_to_lat_lng_rings() {
        let polygon = Polygon::new(vec![
            vec![[2.3, 48.8], [2.4, 48.8], [2.4, 48.9], [2.3, 48.8]],
            vec![[2.34, 48.84], [2.36, 48.84], [2.36, 48.86], [2.34, 48.84]],
        ]);
        let rings = to_lat_lng_rings(&polygon).unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0][1], [48.8, 2.4]);
        assert_eq!(rings[1][0], [48.84, 2.34]);

        assert!(to_lat_lng_rings(&Polygon::default()).is_none());
        assert!(to_lat_lng_rings(&Polygon::new(vec![vec![]])).is_none());
    }
}
