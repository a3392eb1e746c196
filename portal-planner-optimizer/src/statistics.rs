//! Aggregate figures over a planned route.

use std::time::Duration;

use portal_planner_core::RouteTimeEstimate;

use crate::optimizer::OptimizationResult;

/// Summary of the last planned route.
///
/// Totals cover the ordered route only; unaffordable waypoints are counted
/// but contribute nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteStatistics {
    /// Waypoints on the route.
    pub total_waypoints: usize,
    /// Sum of AP potential along the route.
    pub total_ap_potential: u64,
    /// Sum of `gain - cost` XM along the route.
    pub total_xm_balance: i64,
    /// Route waypoints the agent has not captured yet.
    pub uncaptured_waypoints: usize,
    /// Waypoints left off the route for lack of XM.
    pub unaffordable_waypoints: usize,
    /// Estimated time to complete the route.
    pub estimated_time: Duration,
}

impl RouteStatistics {
    /// Summarise `result`, taking the duration from `estimate` when present.
    #[must_use]
    pub fn summarise(result: &OptimizationResult, estimate: Option<&RouteTimeEstimate>) -> Self {
        let ordered = &result.ordered;
        Self {
            total_waypoints: ordered.len(),
            total_ap_potential: ordered
                .iter()
                .fold(0_u64, |sum, c| sum.saturating_add(c.figures.ap_potential)),
            total_xm_balance: ordered
                .iter()
                .fold(0_i64, |sum, c| sum.saturating_add(c.figures.net())),
            uncaptured_waypoints: ordered.iter().filter(|c| !c.waypoint.captured).count(),
            unaffordable_waypoints: result.unaffordable.len(),
            estimated_time: estimate.map_or(Duration::ZERO, RouteTimeEstimate::total),
        }
    }
}
