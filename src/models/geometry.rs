//! GeoJSON-style geometry values.
//!
//! Positions are `[longitude, latitude]`, the reverse of [`super::Coordinate`].
//! Conversions between the two orders live in [`crate::geojson`].

use geo_types::{Coord, LineString};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};

use crate::error::{GeoError, Result};

/// `[longitude, latitude]`
pub type Position = [f64; 2];

/// Closed loop of positions; first and last entries are equal.
pub type Ring = Vec<Position>;

/// Point geometry. `coordinates` is `[lon, lat]` when well formed; it is kept
/// as a plain vector so short or missing coordinates survive deserialization
/// and can be rejected by the caller instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Polygon geometry: outer ring first, holes after it.
///
/// Positions with more than two values (altitude) keep only `[lon, lat]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    #[serde(default, deserialize_with = "deserialize_rings")]
    pub coordinates: Vec<Ring>,
}

fn deserialize_rings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<Ring>, D::Error> {
    let rings = Vec::<Vec<Vec<f64>>>::deserialize(deserializer)?;
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|position| match position.as_slice() {
                    [lon, lat, ..] => Ok([*lon, *lat]),
                    _ => Err(D::Error::custom("position has fewer than 2 coordinates")),
                })
                .collect::<std::result::Result<Ring, D::Error>>()
        })
        .collect()
}

/// The two geometry kinds this crate reads and writes, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point(Point),
    Polygon(Polygon),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum GeometryRef<'a> {
    Point(&'a Point),
    Polygon(&'a Polygon),
}

impl Geometry {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Polygon(_) => "Polygon",
        }
    }
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            coordinates: vec![lon, lat],
        }
    }

    /// Parse serialized text that must hold a `Point`.
    pub fn from_json(text: &str) -> Result<Self> {
        match Geometry::from_json(text)? {
            Geometry::Point(point) => Ok(point),
            other => Err(GeoError::UnexpectedGeometry {
                expected: "Point",
                found: other.kind(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&GeometryRef::Point(self))?)
    }

    /// `[lon, lat]` if at least two coordinates are present.
    pub fn position(&self) -> Option<Position> {
        match self.coordinates.as_slice() {
            [lon, lat, ..] => Some([*lon, *lat]),
            _ => None,
        }
    }
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { coordinates: rings }
    }

    /// Parse serialized text that must hold a `Polygon`.
    pub fn from_json(text: &str) -> Result<Self> {
        match Geometry::from_json(text)? {
            Geometry::Polygon(polygon) => Ok(polygon),
            other => Err(GeoError::UnexpectedGeometry {
                expected: "Polygon",
                found: other.kind(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&GeometryRef::Polygon(self))?)
    }

    /// Outer boundary, if the polygon has one with at least one vertex.
    pub fn outer(&self) -> Option<&Ring> {
        self.coordinates.first().filter(|ring| !ring.is_empty())
    }

    pub fn holes(&self) -> &[Ring] {
        self.coordinates.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.outer().is_none()
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl TryFrom<&Point> for geo_types::Point<f64> {
    type Error = GeoError;

    fn try_from(point: &Point) -> Result<Self> {
        let [lon, lat] = point.position().ok_or(GeoError::MissingCoordinates)?;
        Ok(geo_types::Point::new(lon, lat))
    }
}

fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    LineString::new(ring.iter().map(|&[x, y]| Coord { x, y }).collect())
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: &Polygon) -> Self {
        let exterior = polygon
            .coordinates
            .first()
            .map(ring_to_line_string)
            .unwrap_or_else(|| LineString::new(vec![]));
        let interiors = polygon.holes().iter().map(ring_to_line_string).collect();
        geo_types::Polygon::new(exterior, interiors)
    }
}
