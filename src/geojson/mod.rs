//! Conversions between internal `(lat, lon)` coordinates and GeoJSON
//! `Point`/`Polygon` geometries (`[lon, lat]` positions).
//!
//! Every function that accepts serialized text has a `*_str` twin; malformed
//! input always yields `None` rather than an error.

mod collection;
mod point;
mod polygon;

pub use collection::{all_lat_longs, bounds};
pub use point::{
    from_point, from_point_str, from_point_to_string, to_point, to_point_str, try_from_point,
};
pub use polygon::{
    describe_polygon, describe_polygon_str, polygon_from_rings, polygon_start_coordinate,
    polygon_start_coordinate_str, polygon_start_coordinate_to_string, to_lat_lng_rings,
    to_lat_lng_rings_str, LatLngRings, PolygonDescription,
};
