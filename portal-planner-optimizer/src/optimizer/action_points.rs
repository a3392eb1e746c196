//! Highest AP potential first.

use std::cmp::Reverse;

use portal_planner_core::Candidate;

/// Stable sort by descending AP potential; equal scores keep input order.
pub(super) fn order_by_ap(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ordered = candidates.to_vec();
    ordered.sort_by_key(|candidate| Reverse(candidate.figures.ap_potential));
    ordered
}
