//! Greedy budgeted selection by XM efficiency.

use std::cmp::Ordering;

use portal_planner_core::{Candidate, WaypointFigures};

use super::OptimizationResult;

/// Repeatedly take the affordable candidate with the best `net / cost`
/// ratio, paying its cost and collecting its gain, until nothing remaining
/// fits the budget.
pub(super) fn select_within_budget(candidates: &[Candidate], initial_budget: u64) -> OptimizationResult {
    let mut remaining: Vec<&Candidate> = candidates.iter().collect();
    let mut budget = initial_budget;
    let mut ordered = Vec::with_capacity(candidates.len());
    let mut budget_trace = Vec::with_capacity(candidates.len());

    while let Some(index) = most_efficient_affordable(&remaining, budget) {
        let chosen = remaining.remove(index);
        budget = pay(budget, &chosen.figures);
        log::debug!(
            "selected {} (cost {} XM, gain {} XM); budget now {budget} XM",
            chosen.waypoint.id,
            chosen.figures.cost,
            chosen.figures.gain
        );
        budget_trace.push(budget);
        ordered.push(chosen.clone());
    }

    if !remaining.is_empty() {
        log::debug!(
            "budget of {budget} XM covers none of the remaining {} waypoint(s); stopping early",
            remaining.len()
        );
    }

    OptimizationResult {
        ordered,
        unaffordable: remaining.into_iter().cloned().collect(),
        final_budget: Some(budget),
        budget_trace,
    }
}

/// Pay for `candidates` in the order given, stopping at the first one the
/// running budget cannot cover.
pub(super) fn settle_in_order(candidates: &[Candidate], initial_budget: u64) -> OptimizationResult {
    let mut budget = initial_budget;
    let mut budget_trace = Vec::with_capacity(candidates.len());
    let mut affordable = 0;
    for candidate in candidates {
        if candidate.figures.cost > budget {
            break;
        }
        budget = pay(budget, &candidate.figures);
        budget_trace.push(budget);
        affordable += 1;
    }
    let (ordered, unaffordable) = candidates.split_at(affordable);
    if !unaffordable.is_empty() {
        log::debug!(
            "budget of {budget} XM cannot pay for {}; stopping early",
            unaffordable.len()
        );
    }

    OptimizationResult {
        ordered: ordered.to_vec(),
        unaffordable: unaffordable.to_vec(),
        final_budget: Some(budget),
        budget_trace,
    }
}

const fn pay(budget: u64, figures: &WaypointFigures) -> u64 {
    budget.saturating_sub(figures.cost).saturating_add(figures.gain)
}

fn most_efficient_affordable(remaining: &[&Candidate], budget: u64) -> Option<usize> {
    let mut best: Option<(usize, Efficiency)> = None;
    for (index, candidate) in remaining.iter().enumerate() {
        if candidate.figures.cost > budget {
            continue;
        }
        let efficiency = Efficiency::of(&candidate.figures);
        if best.is_none_or(|(_, incumbent)| efficiency > incumbent) {
            best = Some((index, efficiency));
        }
    }
    best.map(|(index, _)| index)
}

/// The ratio `net / max(cost, 1)` kept as an exact fraction.
///
/// Comparison cross-multiplies in `i128`, so equal ratios compare equal and
/// never depend on floating-point rounding.
#[derive(Debug, Clone, Copy)]
struct Efficiency {
    net: i128,
    cost: i128,
}

impl Efficiency {
    fn of(figures: &WaypointFigures) -> Self {
        Self {
            net: i128::from(figures.net()),
            cost: i128::from(figures.cost.max(1)),
        }
    }
}

impl PartialEq for Efficiency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Efficiency {}

impl PartialOrd for Efficiency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Efficiency {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so the inequality direction holds.
        (self.net * other.cost).cmp(&(other.net * self.cost))
    }
}
