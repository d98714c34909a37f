//! Error types for coordinate and geometry parsing.

use thiserror::Error;

/// Reasons a coordinate or geometry input was rejected.
///
/// Public parsing entry points usually expose these through an `Option`
/// (`parse`, `from_point`, ...); the `try_*` variants return them directly.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid coordinate text: {0:?}")]
    InvalidCoordinateText(String),

    #[error("coordinate component is not a finite number: {0:?}")]
    NonFiniteNumber(String),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("geometry has fewer than 2 coordinates")]
    MissingCoordinates,

    #[error("expected a {expected} geometry, found {found}")]
    UnexpectedGeometry {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed geometry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoError>;
