//! Stateful planning session: configuration, budget bookkeeping and the last
//! planned route.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use geo::LineString;
use portal_planner_core::{
    GeometryError, GeometryProvider, ObjectiveKind, PlayStyle, RouteTimeEstimate, TravelMode,
    Waypoint, WaypointError, WaypointFigures, WaypointId, assess_waypoint, estimate_route_time,
    tables::XM_VALUES,
};
use thiserror::Error;

use crate::optimizer::{OptimizationContext, OptimizationResult, OptimizeError, optimize};
use crate::statistics::RouteStatistics;

/// Errors raised by [`RouteSession`] planning calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A waypoint attribute was out of range.
    #[error("waypoint {id} is invalid: {source}")]
    InvalidWaypoint {
        /// Offending waypoint.
        id: WaypointId,
        /// Which attribute was rejected.
        #[source]
        source: WaypointError,
    },
    /// The same id appeared twice in one request.
    #[error("waypoint {id} appears more than once")]
    DuplicateWaypoint {
        /// Repeated id.
        id: WaypointId,
    },
    /// The geometry provider failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The optimizer failed.
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

/// One planning interaction: owns the geometry provider, the configured
/// play style and objective, the running XM budget and the last result.
///
/// The budget changes only when an Energy plan completes; failed plans leave
/// every field untouched.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{ObjectiveKind, PlayStyle, Waypoint, WaypointCatalogue};
/// use portal_planner_optimizer::RouteSession;
///
/// let waypoints = vec![
///     Waypoint::new("a", Coord { x: 0.0, y: 0.0 }).with_energy(100)?,
///     Waypoint::new("b", Coord { x: 0.001, y: 0.0 }),
///     Waypoint::new("c", Coord { x: 0.002, y: 0.0 }),
/// ];
/// let mut session = RouteSession::new(WaypointCatalogue::new(waypoints.clone()));
/// session.configure(PlayStyle::Quick, ObjectiveKind::Energy, 500);
/// let result = session.plan_route(waypoints)?;
/// assert_eq!(result.ordered.len(), 3);
/// assert_eq!(session.budget(), 850);
/// assert_eq!(session.budget_trace(), [650, 750, 850]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteSession<G> {
    geometry: G,
    play_style: PlayStyle,
    objective: ObjectiveKind,
    travel_mode: TravelMode,
    initial_budget: u64,
    budget: u64,
    last_result: OptimizationResult,
    last_estimate: Option<RouteTimeEstimate>,
    budget_trace: Vec<u64>,
}

impl<G: GeometryProvider> RouteSession<G> {
    /// Start a session with quick hacks, distance ordering, walking and a
    /// level 8 agent's XM capacity.
    #[must_use]
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            play_style: PlayStyle::default(),
            objective: ObjectiveKind::default(),
            travel_mode: TravelMode::default(),
            initial_budget: XM_VALUES.max_xm.l8,
            budget: XM_VALUES.max_xm.l8,
            last_result: OptimizationResult::default(),
            last_estimate: None,
            budget_trace: Vec::new(),
        }
    }

    /// Set the play style, objective and starting budget.
    ///
    /// The current budget restarts from `initial_budget` and the last result
    /// is discarded. The budget trace is kept.
    pub fn configure(&mut self, play_style: PlayStyle, objective: ObjectiveKind, initial_budget: u64) {
        log::debug!(
            "session configured: {play_style} play, {objective} objective, {initial_budget} XM"
        );
        self.play_style = play_style;
        self.objective = objective;
        self.initial_budget = initial_budget;
        self.budget = initial_budget;
        self.last_result = OptimizationResult::default();
        self.last_estimate = None;
    }

    /// Choose how the agent travels between waypoints.
    pub const fn set_travel_mode(&mut self, mode: TravelMode) {
        self.travel_mode = mode;
    }

    /// Restore the configured starting budget and forget the last route and
    /// the budget trace.
    pub fn reset(&mut self) {
        self.budget = self.initial_budget;
        self.last_result = OptimizationResult::default();
        self.last_estimate = None;
        self.budget_trace.clear();
    }

    /// Assess, order and time `waypoints`, then record the outcome.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidWaypoint`] or
    /// [`PlanError::DuplicateWaypoint`] for malformed input, and propagates
    /// geometry and optimizer failures.
    pub fn plan_route<I>(&mut self, waypoints: I) -> Result<&OptimizationResult, PlanError>
    where
        I: IntoIterator<Item = Waypoint>,
    {
        let batch: Vec<Waypoint> = waypoints.into_iter().collect();
        check_batch(&batch)?;
        let candidates = batch
            .into_iter()
            .map(|waypoint| assess_waypoint(&self.geometry, waypoint, self.play_style))
            .collect::<Result<Vec<_>, _>>()?;
        let context = OptimizationContext::new(&self.geometry, self.budget);
        let result = optimize(&candidates, self.objective, &context)?;
        let route: Vec<Waypoint> = result.waypoints().cloned().collect();
        let estimate =
            estimate_route_time(&route, self.play_style, self.travel_mode, &self.geometry)?;
        self.record(result, estimate);
        Ok(&self.last_result)
    }

    /// Plan every waypoint the provider finds within `radius_m` of
    /// `corridor`.
    ///
    /// A corridor with no waypoints nearby is not an error: it is logged as a
    /// warning and planned as an empty route, leaving the budget as it was.
    /// A failed lookup is returned as [`PlanError::Geometry`] instead.
    ///
    /// # Errors
    /// As [`RouteSession::plan_route`], plus corridor query failures.
    pub fn plan_corridor(
        &mut self,
        corridor: &LineString<f64>,
        radius_m: f64,
    ) -> Result<&OptimizationResult, PlanError> {
        let nearby = self.geometry.waypoints_near(corridor, radius_m)?;
        if nearby.is_empty() {
            log::warn!("no waypoints within {radius_m} m of the corridor; planning an empty route");
        } else {
            log::debug!(
                "{} waypoint(s) within {radius_m} m of the corridor",
                nearby.len()
            );
        }
        self.plan_route(nearby)
    }

    /// Figures for one waypoint under the current play style.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidWaypoint`] for out-of-range attributes and
    /// propagates neighbour lookup failures.
    pub fn figures_for(&self, waypoint: &Waypoint) -> Result<WaypointFigures, PlanError> {
        check_waypoint(waypoint)?;
        let candidate = assess_waypoint(&self.geometry, waypoint.clone(), self.play_style)?;
        Ok(candidate.figures)
    }

    /// Aggregate figures over the last planned route.
    #[must_use]
    pub fn statistics(&self) -> RouteStatistics {
        RouteStatistics::summarise(&self.last_result, self.last_estimate.as_ref())
    }

    /// Current play style.
    #[must_use]
    pub const fn play_style(&self) -> PlayStyle {
        self.play_style
    }

    /// Current objective.
    #[must_use]
    pub const fn objective(&self) -> ObjectiveKind {
        self.objective
    }

    /// Current travel mode.
    #[must_use]
    pub const fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    /// XM currently available.
    #[must_use]
    pub const fn budget(&self) -> u64 {
        self.budget
    }

    /// XM the session was configured with.
    #[must_use]
    pub const fn initial_budget(&self) -> u64 {
        self.initial_budget
    }

    /// Budget after every waypoint accepted by Energy plans, oldest first.
    #[must_use]
    pub fn budget_trace(&self) -> &[u64] {
        &self.budget_trace
    }

    /// Outcome of the last successful plan.
    #[must_use]
    pub const fn last_result(&self) -> &OptimizationResult {
        &self.last_result
    }

    /// Time estimate for the last successful plan.
    #[must_use]
    pub const fn last_estimate(&self) -> Option<&RouteTimeEstimate> {
        self.last_estimate.as_ref()
    }

    /// The geometry provider.
    #[must_use]
    pub const fn geometry(&self) -> &G {
        &self.geometry
    }

    fn record(&mut self, result: OptimizationResult, estimate: RouteTimeEstimate) {
        if let Some(final_budget) = result.final_budget {
            self.budget = final_budget;
            self.budget_trace.extend_from_slice(&result.budget_trace);
        }
        log::debug!(
            "planned {} waypoint(s), {} unaffordable, {} XM left",
            result.ordered.len(),
            result.unaffordable.len(),
            self.budget
        );
        self.last_result = result;
        self.last_estimate = Some(estimate);
    }
}

fn check_waypoint(waypoint: &Waypoint) -> Result<(), PlanError> {
    waypoint
        .validate()
        .map_err(|source| PlanError::InvalidWaypoint {
            id: waypoint.id.clone(),
            source,
        })
}

fn check_batch(batch: &[Waypoint]) -> Result<(), PlanError> {
    let mut seen = HashSet::with_capacity(batch.len());
    for waypoint in batch {
        check_waypoint(waypoint)?;
        if !seen.insert(&waypoint.id) {
            return Err(PlanError::DuplicateWaypoint {
                id: waypoint.id.clone(),
            });
        }
    }
    Ok(())
}
