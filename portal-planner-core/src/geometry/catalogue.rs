//! In-memory geometry provider over a fixed list of waypoints.

use geo::{Coord, Distance, Euclidean, Haversine, LineString, Point};

use super::error::GeometryError;
use super::provider::GeometryProvider;
use crate::waypoint::Waypoint;

/// Mean Earth radius in metres, the same radius `geo`'s haversine uses.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A candidate list answering geometry queries with great-circle distances.
///
/// Queries scan linearly and keep catalogue order, which is what the
/// optimizer's input-order tie-breaks rely on. Corridor queries project onto
/// a local equirectangular plane centred on the corridor's first vertex; the
/// error is negligible at corridor scales.
///
/// # Examples
/// ```
/// use geo::{Coord, LineString};
/// use portal_planner_core::{GeometryProvider, Waypoint, WaypointCatalogue};
///
/// let catalogue = WaypointCatalogue::new(vec![
///     Waypoint::new("on-path", Coord { x: 0.0005, y: 0.0001 }),
///     Waypoint::new("off-path", Coord { x: 0.0005, y: 0.01 }),
/// ]);
/// let corridor = LineString::from(vec![(0.0, 0.0), (0.001, 0.0)]);
/// let near = catalogue.waypoints_near(&corridor, 40.0)?;
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].id.as_str(), "on-path");
/// # Ok::<(), portal_planner_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointCatalogue {
    waypoints: Vec<Waypoint>,
}

impl WaypointCatalogue {
    /// Create a catalogue from candidate waypoints.
    #[must_use]
    pub const fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Waypoints in catalogue order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

impl FromIterator<Waypoint> for WaypointCatalogue {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl GeometryProvider for WaypointCatalogue {
    fn distance_between(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, GeometryError> {
        let distance = Haversine.distance(Point::from(from), Point::from(to));
        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(GeometryError::InvalidDistance { from, to })
        }
    }

    fn waypoints_near(
        &self,
        corridor: &LineString<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        check_radius(radius_m)?;
        let origin = corridor
            .0
            .first()
            .copied()
            .ok_or(GeometryError::EmptyCorridor)?;
        let projection = LocalProjection::around(origin);
        let path: LineString<f64> = corridor
            .coords()
            .map(|coord| projection.project(*coord))
            .collect();
        Ok(self
            .waypoints
            .iter()
            .filter(|waypoint| {
                let point = Point::from(projection.project(waypoint.location));
                distance_to_path(point, &path) <= radius_m
            })
            .cloned()
            .collect())
    }

    fn waypoints_within(
        &self,
        centre: Coord<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        check_radius(radius_m)?;
        let origin = Point::from(centre);
        Ok(self
            .waypoints
            .iter()
            .filter(|waypoint| Haversine.distance(origin, Point::from(waypoint.location)) <= radius_m)
            .cloned()
            .collect())
    }
}

fn check_radius(radius: f64) -> Result<(), GeometryError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius { radius })
    }
}

/// Planar distance from `point` to a projected path. A single-vertex path
/// degenerates to a point.
#[expect(
    clippy::float_arithmetic,
    reason = "point-to-point fallback measures a planar hypotenuse"
)]
fn distance_to_path(point: Point<f64>, path: &LineString<f64>) -> f64 {
    match path.0.as_slice() {
        [only] => (point.x() - only.x).hypot(point.y() - only.y),
        _ => Euclidean.distance(&point, path),
    }
}

/// Equirectangular projection to metres around a fixed origin.
struct LocalProjection {
    origin: Coord<f64>,
    metres_per_degree_lat: f64,
    metres_per_degree_lon: f64,
}

impl LocalProjection {
    #[expect(
        clippy::float_arithmetic,
        reason = "projection scales degrees to metres"
    )]
    fn around(origin: Coord<f64>) -> Self {
        let metres_per_degree_lat = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        Self {
            origin,
            metres_per_degree_lat,
            metres_per_degree_lon: metres_per_degree_lat * origin.y.to_radians().cos(),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "projection scales degrees to metres"
    )]
    fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: (coord.x - self.origin.x) * self.metres_per_degree_lon,
            y: (coord.y - self.origin.y) * self.metres_per_degree_lat,
        }
    }
}
