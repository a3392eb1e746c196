//! Route optimizer: orders assessed candidates under one objective.
//!
//! All three strategies are greedy heuristics. None of them searches for an
//! optimal tour; they trade quality for predictable, input-ordered results.

mod action_points;
mod distance;
mod energy;


use portal_planner_core::{Candidate, GeometryError, GeometryProvider, ObjectiveKind, Waypoint};
use thiserror::Error;

/// Inputs every strategy may draw on besides the candidates themselves.
#[derive(Debug)]
pub struct OptimizationContext<'a, G: ?Sized> {
    /// Distance oracle for the Distance strategy.
    pub geometry: &'a G,
    /// XM available before the first waypoint, for the Energy strategy.
    pub initial_budget: u64,
}

impl<'a, G: ?Sized> OptimizationContext<'a, G> {
    /// Bundle a provider with a starting budget.
    pub const fn new(geometry: &'a G, initial_budget: u64) -> Self {
        Self {
            geometry,
            initial_budget,
        }
    }
}

/// Outcome of one optimizer run.
///
/// `ordered` and `unaffordable` together always hold every input candidate
/// exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptimizationResult {
    /// Visiting order.
    pub ordered: Vec<Candidate>,
    /// Candidates the Energy strategy could not pay for, in input order.
    pub unaffordable: Vec<Candidate>,
    /// Budget after the last accepted waypoint; `Some` only for Energy.
    pub final_budget: Option<u64>,
    /// Budget after each accepted waypoint; filled only by Energy.
    pub budget_trace: Vec<u64>,
}

impl OptimizationResult {
    /// Pass `candidates` through untouched, with no budget bookkeeping.
    #[must_use]
    pub fn unchanged(candidates: &[Candidate]) -> Self {
        Self {
            ordered: candidates.to_vec(),
            ..Self::default()
        }
    }

    /// Waypoints in visiting order.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.ordered.iter().map(|candidate| &candidate.waypoint)
    }

    /// Whether the run placed no waypoint on the route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Errors raised while ordering candidates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The geometry provider failed or returned an unusable distance.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Order `candidates` under `objective`.
///
/// Inputs of two or fewer candidates keep their input order for every
/// objective. Energy still settles the budget over that order, stopping at
/// the first candidate the running budget cannot pay for.
///
/// # Errors
/// Returns [`OptimizeError::Geometry`] when the Distance strategy cannot get
/// a usable distance from the provider.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{ObjectiveKind, PlayStyle, Waypoint, WaypointCatalogue, assess_waypoint};
/// use portal_planner_optimizer::{OptimizationContext, optimize};
///
/// let catalogue = WaypointCatalogue::default();
/// let candidates = ["a", "b", "c"]
///     .into_iter()
///     .zip([0.0, 0.002, 0.001])
///     .map(|(id, x)| assess_waypoint(&catalogue, Waypoint::new(id, Coord { x, y: 0.0 }), PlayStyle::Quick))
///     .collect::<Result<Vec<_>, _>>()?;
/// let context = OptimizationContext::new(&catalogue, 10_000);
/// let result = optimize(&candidates, ObjectiveKind::Distance, &context)?;
/// let ids: Vec<&str> = result.waypoints().map(|w| w.id.as_str()).collect();
/// assert_eq!(ids, ["a", "c", "b"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn optimize<G>(
    candidates: &[Candidate],
    objective: ObjectiveKind,
    context: &OptimizationContext<'_, G>,
) -> Result<OptimizationResult, OptimizeError>
where
    G: GeometryProvider + ?Sized,
{
    if candidates.len() <= 2 {
        log::debug!(
            "{} candidate(s) need no ordering; keeping input order",
            candidates.len()
        );
        return Ok(match objective {
            ObjectiveKind::Energy => energy::settle_in_order(candidates, context.initial_budget),
            ObjectiveKind::Distance | ObjectiveKind::ActionPoints => {
                OptimizationResult::unchanged(candidates)
            }
        });
    }
    log::debug!(
        "ordering {} candidates by {objective}",
        candidates.len()
    );
    let result = match objective {
        ObjectiveKind::Distance => OptimizationResult {
            ordered: distance::nearest_neighbour_order(candidates, context.geometry)?,
            ..OptimizationResult::default()
        },
        ObjectiveKind::ActionPoints => OptimizationResult {
            ordered: action_points::order_by_ap(candidates),
            ..OptimizationResult::default()
        },
        ObjectiveKind::Energy => energy::select_within_budget(candidates, context.initial_budget),
    };
    Ok(result)
}
