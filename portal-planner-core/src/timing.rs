//! Route time estimates from leg distances, action times and arrival waits.

use std::time::Duration;

use crate::geometry::{GeometryError, GeometryProvider};
use crate::style::{PlayStyle, TravelMode};
use crate::tables::TIME_ESTIMATES;
use crate::waypoint::Waypoint;

/// Breakdown of the time needed to walk, ride or drive a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteTimeEstimate {
    /// Total leg distance in metres.
    pub distance_m: f64,
    /// Time spent moving between waypoints.
    pub travel: Duration,
    /// Time spent acting at waypoints.
    pub actions: Duration,
    /// Time spent waiting on arrival (lights, parking).
    pub stops: Duration,
}

impl RouteTimeEstimate {
    /// Sum of travel, action and stop time.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.travel
            .saturating_add(self.actions)
            .saturating_add(self.stops)
    }
}

/// Time spent at each waypoint under `play_style`.
#[must_use]
pub const fn action_time(play_style: PlayStyle) -> Duration {
    match play_style {
        PlayStyle::Quick => TIME_ESTIMATES.quick_hack,
        PlayStyle::Full => TIME_ESTIMATES.full_deploy,
        PlayStyle::Fields => TIME_ESTIMATES.field_deploy,
    }
}

/// Travel speed in metres per second.
#[must_use]
pub const fn travel_speed(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Walking => TIME_ESTIMATES.walking_speed_mps,
        TravelMode::Biking => TIME_ESTIMATES.biking_speed_mps,
        TravelMode::Driving => TIME_ESTIMATES.driving_speed_mps,
    }
}

/// Wait incurred on each arrival after the first waypoint.
#[must_use]
pub const fn arrival_wait(mode: TravelMode) -> Duration {
    match mode {
        TravelMode::Walking => Duration::ZERO,
        TravelMode::Biking => TIME_ESTIMATES.stop_time.traffic_light,
        TravelMode::Driving => TIME_ESTIMATES.stop_time.parking,
    }
}

/// Estimate how long `route` takes in the given order.
///
/// # Errors
/// Returns [`GeometryError::InvalidDistance`] when the provider yields a
/// negative or non-finite leg, and propagates any provider failure.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use portal_planner_core::{
///     PlayStyle, TravelMode, Waypoint, WaypointCatalogue, estimate_route_time,
/// };
///
/// let fountain = Coord { x: -0.1276, y: 51.5072 };
/// let route = vec![Waypoint::new("a", fountain), Waypoint::new("b", fountain)];
/// let geometry = WaypointCatalogue::default();
/// let estimate = estimate_route_time(&route, PlayStyle::Quick, TravelMode::Biking, &geometry)?;
/// assert_eq!(estimate.travel, Duration::ZERO);
/// assert_eq!(estimate.actions, Duration::from_secs(30));
/// assert_eq!(estimate.stops, Duration::from_secs(30));
/// # Ok::<(), portal_planner_core::GeometryError>(())
/// ```
pub fn estimate_route_time<G>(
    route: &[Waypoint],
    play_style: PlayStyle,
    mode: TravelMode,
    geometry: &G,
) -> Result<RouteTimeEstimate, GeometryError>
where
    G: GeometryProvider + ?Sized,
{
    let mut distance_m = 0.0_f64;
    for leg in route.windows(2) {
        let [from, to] = leg else { continue };
        let metres = geometry.distance_between(from.location, to.location)?;
        if !metres.is_finite() || metres < 0.0 {
            return Err(GeometryError::InvalidDistance {
                from: from.location,
                to: to.location,
            });
        }
        distance_m = accumulate(distance_m, metres);
    }

    let stops_made = u32::try_from(route.len()).unwrap_or(u32::MAX);
    let arrivals = stops_made.saturating_sub(1);
    let travel = travel_duration(distance_m, travel_speed(mode)).ok_or_else(|| {
        GeometryError::Unavailable {
            message: format!("route length {distance_m} m cannot be expressed as a duration"),
        }
    })?;

    Ok(RouteTimeEstimate {
        distance_m,
        travel,
        actions: action_time(play_style).saturating_mul(stops_made),
        stops: arrival_wait(mode).saturating_mul(arrivals),
    })
}

#[expect(clippy::float_arithmetic, reason = "leg distances are summed in metres")]
fn accumulate(total: f64, metres: f64) -> f64 {
    total + metres
}

#[expect(clippy::float_arithmetic, reason = "travel time is distance over speed")]
fn travel_duration(distance_m: f64, speed_mps: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(distance_m / speed_mps).ok()
}
