use geo::Coord;
use thiserror::Error;

/// Errors from [`crate::geometry::GeometryProvider`] queries.
///
/// The planner never retries or substitutes defaults; these surface to the
/// caller as a failed planning request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The corridor had no vertices.
    #[error("corridor must contain at least one coordinate")]
    EmptyCorridor,
    /// A search radius was negative or not finite.
    #[error("search radius must be a finite, non-negative number of metres, found {radius}")]
    InvalidRadius {
        /// Rejected radius.
        radius: f64,
    },
    /// The provider produced a distance that cannot be used.
    #[error("distance from {from:?} to {to:?} is not a finite, non-negative number")]
    InvalidDistance {
        /// Origin of the failed leg.
        from: Coord<f64>,
        /// Destination of the failed leg.
        to: Coord<f64>,
    },
    /// The backing data source could not answer.
    #[error("geometry data unavailable: {message}")]
    Unavailable {
        /// Provider-specific detail.
        message: String,
    },
}
