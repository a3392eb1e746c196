//! Test-only geometry providers and waypoint builders used by unit and
//! behaviour tests.

use geo::{Coord, Distance, Euclidean, LineString, Point};

use crate::{GeometryError, GeometryProvider, Waypoint};

/// Build a neutral level-1 waypoint at `(x, y)`.
#[must_use]
pub fn waypoint(id: &str, x: f64, y: f64) -> Waypoint {
    Waypoint::new(id, Coord { x, y })
}

/// Flat-plane `GeometryProvider` treating coordinates as metres.
///
/// Queries are linear scans with inclusive boundaries and keep insertion
/// order. Intended only for small datasets.
#[derive(Default, Debug, Clone)]
pub struct PlanarGeometry {
    waypoints: Vec<Waypoint>,
}

impl PlanarGeometry {
    /// Create a provider answering proximity queries over `waypoints`.
    pub fn with_waypoints<I>(waypoints: I) -> Self
    where
        I: IntoIterator<Item = Waypoint>,
    {
        Self {
            waypoints: waypoints.into_iter().collect(),
        }
    }
}

#[expect(clippy::float_arithmetic, reason = "planar distance")]
fn planar(from: Coord<f64>, to: Coord<f64>) -> f64 {
    (to.x - from.x).hypot(to.y - from.y)
}

fn check_radius(radius: f64) -> Result<(), GeometryError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius { radius })
    }
}

impl GeometryProvider for PlanarGeometry {
    fn distance_between(&self, from: Coord<f64>, to: Coord<f64>) -> Result<f64, GeometryError> {
        Ok(planar(from, to))
    }

    fn waypoints_near(
        &self,
        corridor: &LineString<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        check_radius(radius_m)?;
        if corridor.0.is_empty() {
            return Err(GeometryError::EmptyCorridor);
        }
        let within = |waypoint: &&Waypoint| match corridor.0.as_slice() {
            [only] => planar(*only, waypoint.location) <= radius_m,
            _ => Euclidean.distance(&Point::from(waypoint.location), corridor) <= radius_m,
        };
        Ok(self.waypoints.iter().filter(within).cloned().collect())
    }

    fn waypoints_within(
        &self,
        centre: Coord<f64>,
        radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        check_radius(radius_m)?;
        Ok(self
            .waypoints
            .iter()
            .filter(|waypoint| planar(centre, waypoint.location) <= radius_m)
            .cloned()
            .collect())
    }
}

/// `GeometryProvider` whose every query fails with
/// [`GeometryError::Unavailable`].
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingGeometry;

impl FailingGeometry {
    fn failure() -> GeometryError {
        GeometryError::Unavailable {
            message: "geometry backend offline".to_owned(),
        }
    }
}

impl GeometryProvider for FailingGeometry {
    fn distance_between(&self, _from: Coord<f64>, _to: Coord<f64>) -> Result<f64, GeometryError> {
        Err(Self::failure())
    }

    fn waypoints_near(
        &self,
        _corridor: &LineString<f64>,
        _radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        Err(Self::failure())
    }

    fn waypoints_within(
        &self,
        _centre: Coord<f64>,
        _radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        Err(Self::failure())
    }
}

/// `GeometryProvider` reporting the same distance for every leg and no
/// nearby waypoints. Useful for feeding malformed distances to callers.
#[derive(Debug, Copy, Clone)]
pub struct ConstantDistance(pub f64);

impl GeometryProvider for ConstantDistance {
    fn distance_between(&self, _from: Coord<f64>, _to: Coord<f64>) -> Result<f64, GeometryError> {
        Ok(self.0)
    }

    fn waypoints_near(
        &self,
        _corridor: &LineString<f64>,
        _radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        Ok(Vec::new())
    }

    fn waypoints_within(
        &self,
        _centre: Coord<f64>,
        _radius_m: f64,
    ) -> Result<Vec<Waypoint>, GeometryError> {
        Ok(Vec::new())
    }
}
