//! Geoloc - coordinate parsing, GeoJSON conversion and point-in-polygon
//! matching for WGS84 latitude/longitude data.
//!
//! Coordinates are `(lat, lon)` internally; GeoJSON positions are `[lon, lat]`.
//! The [`geojson`] module is the only place where the two orders meet.

pub mod codec;
pub mod config;
pub mod distance;
pub mod error;
pub mod geojson;
pub mod matcher;
pub mod models;
pub mod pip;

pub use config::Config;
pub use error::GeoError;
pub use matcher::LocationMatcher;
pub use models::{Coordinate, Geometry, LocationEntry, Point, Polygon};
