//! Point-in-polygon tests over GeoJSON rings.
//!
//! All functions take `(x, y)` in position order, i.e. `x` is longitude and
//! `y` is latitude. Boundaries are inclusive everywhere: a point on an edge of
//! a ring is inside that ring, for outer rings and holes alike.

mod polygon;
mod ring;
mod segment;

pub use polygon::{coordinate_in_polygon, point_in_polygon, point_in_polygon_str};
pub use ring::point_in_ring;
pub use segment::{point_on_segment, SEGMENT_EPSILON};
