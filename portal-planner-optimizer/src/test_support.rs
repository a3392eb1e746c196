//! Test-only utilities for `portal-planner-optimizer`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use geo::Coord;
use portal_planner_core::{Candidate, Waypoint, WaypointFigures};

/// Construct a candidate with hand-picked figures at `(x, y)`.
///
/// The figures bypass the resource model so optimizer tests can state costs
/// and gains directly.
#[must_use]
pub fn candidate(id: &str, x: f64, y: f64, cost: u64, gain: u64, ap_potential: u64) -> Candidate {
    Candidate {
        waypoint: Waypoint::new(id, Coord { x, y }),
        figures: WaypointFigures {
            cost,
            gain,
            ap_potential,
        },
    }
}

/// Candidate at `(x, y)` with zeroed figures, for distance-only tests.
#[must_use]
pub fn located(id: &str, x: f64, y: f64) -> Candidate {
    candidate(id, x, y, 0, 0, 0)
}

/// Identifiers of `candidates` in order.
#[must_use]
pub fn ids(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| c.waypoint.id.as_str().to_owned())
        .collect()
}
