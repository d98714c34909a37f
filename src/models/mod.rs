//! Value types shared by every geometry module.

pub mod coordinate;
pub mod entry;
pub mod geometry;

pub use coordinate::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
pub use entry::LocationEntry;
pub use geometry::{Geometry, Point, Polygon, Position, Ring};
