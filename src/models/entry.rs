//! Reference list entries accepted by the location matcher.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{Geometry, Point, Polygon};

/// One element of a heterogeneous reference list.
///
/// In JSON this is `null`, a coordinate string such as `"48.85,2.35"`, or a
/// `Point`/`Polygon` object. Objects of any other shape load as `Absent`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationEntry {
    /// Unparsed coordinate text.
    Raw(String),
    Point(Point),
    Polygon(Polygon),
    #[default]
    Absent,
}

impl From<Geometry> for LocationEntry {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Point(point) => LocationEntry::Point(point),
            Geometry::Polygon(polygon) => LocationEntry::Polygon(polygon),
        }
    }
}

impl From<Point> for LocationEntry {
    fn from(point: Point) -> Self {
        LocationEntry::Point(point)
    }
}

impl From<Polygon> for LocationEntry {
    fn from(polygon: Polygon) -> Self {
        LocationEntry::Polygon(polygon)
    }
}

impl From<String> for LocationEntry {
    fn from(text: String) -> Self {
        LocationEntry::Raw(text)
    }
}

impl From<&str> for LocationEntry {
    fn from(text: &str) -> Self {
        LocationEntry::Raw(text.to_string())
    }
}

impl<T: Into<LocationEntry>> From<Option<T>> for LocationEntry {
    fn from(entry: Option<T>) -> Self {
        entry.map_or(LocationEntry::Absent, Into::into)
    }
}

impl<'de> Deserialize<'de> for LocationEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let entry = match value {
            Value::Null => LocationEntry::Absent,
            Value::String(text) => LocationEntry::Raw(text),
            other => match serde_json::from_value::<Geometry>(other) {
                Ok(geometry) => geometry.into(),
                Err(e) => {
                    debug!("Treating unsupported location entry as absent: {}", e);
                    LocationEntry::Absent
                }
            },
        };
        Ok(entry)
    }
}

impl Serialize for LocationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LocationEntry::Raw(text) => serializer.serialize_str(text),
            LocationEntry::Point(point) => Geometry::Point(point.clone()).serialize(serializer),
            LocationEntry::Polygon(polygon) => {
                Geometry::Polygon(polygon.clone()).serialize(serializer)
            }
            LocationEntry::Absent => serializer.serialize_none(),
        }
    }
}
