//! JSON report printed by `plan`.

use geo::Coord;
use portal_planner_core::{Candidate, GeometryProvider, ObjectiveKind, PlayStyle, TravelMode, WaypointId};
use portal_planner_optimizer::RouteSession;
use serde::Serialize;

/// Planned route plus the figures a player needs to follow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlanReport {
    pub(crate) play_style: PlayStyle,
    pub(crate) objective: ObjectiveKind,
    pub(crate) travel_mode: TravelMode,
    pub(crate) route: Vec<RouteStop>,
    pub(crate) unaffordable: Vec<WaypointId>,
    pub(crate) final_budget: Option<u64>,
    pub(crate) budget_trace: Vec<u64>,
    pub(crate) statistics: StatisticsReport,
}

/// One stop on the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RouteStop {
    pub(crate) id: WaypointId,
    pub(crate) location: Coord<f64>,
    pub(crate) level: u8,
    pub(crate) energy: u8,
    pub(crate) resonators: u8,
    pub(crate) captured: bool,
    pub(crate) xm_cost: u64,
    pub(crate) xm_gain: u64,
    pub(crate) xm_net: i64,
    pub(crate) ap_potential: u64,
}

impl From<&Candidate> for RouteStop {
    fn from(candidate: &Candidate) -> Self {
        let waypoint = &candidate.waypoint;
        Self {
            id: waypoint.id.clone(),
            location: waypoint.location,
            level: waypoint.level,
            energy: waypoint.energy,
            resonators: waypoint.resonators,
            captured: waypoint.captured,
            xm_cost: candidate.figures.cost,
            xm_gain: candidate.figures.gain,
            xm_net: candidate.figures.net(),
            ap_potential: candidate.figures.ap_potential,
        }
    }
}

/// Route totals with durations in whole seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StatisticsReport {
    pub(crate) total_waypoints: usize,
    pub(crate) total_ap_potential: u64,
    pub(crate) total_xm_balance: i64,
    pub(crate) uncaptured_waypoints: usize,
    pub(crate) unaffordable_waypoints: usize,
    pub(crate) distance_m: f64,
    pub(crate) travel_seconds: u64,
    pub(crate) action_seconds: u64,
    pub(crate) stop_seconds: u64,
    pub(crate) estimated_seconds: u64,
}

impl PlanReport {
    #[must_use]
    pub(crate) fn from_session<G: GeometryProvider>(session: &RouteSession<G>) -> Self {
        let result = session.last_result();
        let stats = session.statistics();
        let estimate = session.last_estimate().copied().unwrap_or_default();
        Self {
            play_style: session.play_style(),
            objective: session.objective(),
            travel_mode: session.travel_mode(),
            route: result.ordered.iter().map(RouteStop::from).collect(),
            unaffordable: result
                .unaffordable
                .iter()
                .map(|candidate| candidate.waypoint.id.clone())
                .collect(),
            final_budget: result.final_budget,
            budget_trace: result.budget_trace.clone(),
            statistics: StatisticsReport {
                total_waypoints: stats.total_waypoints,
                total_ap_potential: stats.total_ap_potential,
                total_xm_balance: stats.total_xm_balance,
                uncaptured_waypoints: stats.uncaptured_waypoints,
                unaffordable_waypoints: stats.unaffordable_waypoints,
                distance_m: estimate.distance_m,
                travel_seconds: estimate.travel.as_secs(),
                action_seconds: estimate.actions.as_secs(),
                stop_seconds: estimate.stops.as_secs(),
                estimated_seconds: stats.estimated_time.as_secs(),
            },
        }
    }
}
