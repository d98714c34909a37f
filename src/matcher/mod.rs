//! Matching a query point against a heterogeneous list of reference locations.
//!
//! Coordinate text and points match when both sides render to the same text
//! at the configured precision; polygons match by exact containment.

use rayon::prelude::*;
use tracing::debug;

use crate::codec;
use crate::config::MatcherConfig;
use crate::geojson;
use crate::models::{Coordinate, LocationEntry};
use crate::pip;

/// Reusable matcher holding the comparison precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationMatcher {
    precision: usize,
}

impl Default for LocationMatcher {
    fn default() -> Self {
        Self::new(codec::DEFAULT_DECIMALS)
    }
}

impl From<&MatcherConfig> for LocationMatcher {
    fn from(config: &MatcherConfig) -> Self {
        Self::new(config.precision)
    }
}

impl LocationMatcher {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Index of the first entry matching `(lat, lon)`.
    pub fn find(&self, lat: f64, lon: f64, entries: &[LocationEntry]) -> Option<usize> {
        let query = codec::format(lat, lon, self.precision);

        entries.iter().position(|entry| match entry {
            LocationEntry::Absent => false,
            LocationEntry::Raw(text) => match codec::parse(text) {
                Some(c) => codec::format_coordinate(&c, self.precision) == query,
                None => {
                    debug!("Skipping unparsable location text {:?}", text);
                    false
                }
            },
            LocationEntry::Point(point) => match geojson::from_point(point) {
                Some(c) => codec::format_coordinate(&c, self.precision) == query,
                None => {
                    debug!("Skipping point without usable coordinates");
                    false
                }
            },
            LocationEntry::Polygon(polygon) => pip::point_in_polygon(lon, lat, polygon),
        })
    }

    /// Whether `(lat, lon)` corresponds to any entry.
    pub fn matches(&self, lat: f64, lon: f64, entries: &[LocationEntry]) -> bool {
        let found = self.find(lat, lon, entries);
        debug!("Match for ({}, {}): {:?}", lat, lon, found);
        found.is_some()
    }

    /// Query points that match at least one entry, in input order.
    pub fn filter_points(
        &self,
        points: &[Coordinate],
        entries: &[LocationEntry],
    ) -> Vec<Coordinate> {
        points
            .par_iter()
            .filter(|c| self.find(c.lat(), c.lon(), entries).is_some())
            .copied()
            .collect()
    }
}

/// One-shot form of [`LocationMatcher::matches`].
pub fn matches(lat: f64, lon: f64, entries: &[LocationEntry], precision: usize) -> bool {
    LocationMatcher::new(precision).matches(lat, lon, entries)
}
