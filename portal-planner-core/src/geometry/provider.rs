//! Geometry provider trait and the link-range neighbour lookup built on it.

use geo::{Coord, LineString};

use super::error::GeometryError;
use crate::tables::link_range_for_level;
use crate::waypoint::Waypoint;

/// Answer distance and proximity queries for the planner.
///
/// Implementations must be deterministic: the same query returns the same
/// waypoints in the same order, so planning stays reproducible.
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, LineString};
/// use portal_planner_core::{GeometryError, GeometryProvider, Waypoint};
///
/// struct Straight(Vec<Waypoint>);
///
/// impl GeometryProvider for Straight {
///     fn distance_between(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, GeometryError> {
///         Ok((to.x - from.x).abs())
///     }
///
///     fn waypoints_near(
///         &self,
///         _corridor: &LineString<f64>,
///         _radius_m: f64,
///     ) -> Result<Vec<Waypoint>, GeometryError> {
///         Ok(self.0.clone())
///     }
///
///     fn waypoints_within(
///         &self,
///         _centre: Coord<f64>,
///         _radius_m: f64,
///     ) -> Result<Vec<Waypoint>, GeometryError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let provider = Straight(Vec::new());
/// let d = provider.distance_between(Coord { x: 1.0, y: 0.0 }, Coord { x: 4.0, y: 0.0 })?;
/// assert_eq!(d, 3.0);
/// # Ok::<(), GeometryError>(())
/// ```
pub trait GeometryProvider {
    /// Distance in metres between two coordinates.
    ///
    /// # Errors
    /// Returns [`GeometryError`] when the distance cannot be determined.
    fn distance_between(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, GeometryError>;

    /// Waypoints within `radius_m` of any point on `corridor`.
    ///
    /// # Errors
    /// Implementations must return [`GeometryError::EmptyCorridor`] for a
    /// corridor without coordinates and [`GeometryError::InvalidRadius`] for
    /// a negative or non-finite radius.
    fn waypoints_near(
        &self,
        corridor: &LineString<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError>;

    /// Waypoints within `radius_m` of `centre`, boundary included.
    ///
    /// # Errors
    /// Implementations must return [`GeometryError::InvalidRadius`] for a
    /// negative or non-finite radius.
    fn waypoints_within(
        &self,
        centre: Coord<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError>;
}

/// Count the other waypoints `waypoint` could link to at its level.
///
/// The waypoint itself is excluded by identity.
///
/// # Errors
/// Propagates [`GeometryError`] from the provider.
pub fn neighbours_in_link_range<G>(geometry: &G, waypoint: &Waypoint) -> Result<usize, GeometryError>
where
    G: GeometryProvider + ?Sized,
{
    let Some(range) = link_range_for_level(waypoint.level) else {
        log::warn!(
            "waypoint {} has level {} outside the link-range table; assuming no neighbours",
            waypoint.id,
            waypoint.level
        );
        return Ok(0);
    };
    let nearby = geometry.waypoints_within(waypoint.location, range)?;
    Ok(nearby
        .iter()
        .filter(|candidate| candidate.id != waypoint.id)
        .count())
}
