//! Nearest-neighbour ordering.

use portal_planner_core::{Candidate, GeometryError, GeometryProvider};

/// Anchor on the first candidate and keep hopping to the closest remaining
/// one. Ties go to the earlier input. O(n²) provider calls.
pub(super) fn nearest_neighbour_order<G>(
    candidates: &[Candidate],
    geometry: &G,
) -> Result<Vec<Candidate>, GeometryError>
where
    G: GeometryProvider + ?Sized,
{
    let Some((first, rest)) = candidates.split_first() else {
        return Ok(Vec::new());
    };
    let mut remaining: Vec<&Candidate> = rest.iter().collect();
    let mut ordered = Vec::with_capacity(candidates.len());
    let mut current = first;
    ordered.push(current.clone());

    while !remaining.is_empty() {
        let mut closest: Option<(usize, f64)> = None;
        for (index, candidate) in remaining.iter().enumerate() {
            let metres = leg_length(geometry, current, candidate)?;
            if closest.is_none_or(|(_, best)| metres < best) {
                closest = Some((index, metres));
            }
        }
        let Some((index, _)) = closest else { break };
        // `remove` keeps the remaining candidates in input order for tie-breaks.
        current = remaining.remove(index);
        ordered.push(current.clone());
    }
    Ok(ordered)
}

fn leg_length<G>(
    geometry: &G,
    origin: &Candidate,
    destination: &Candidate,
) -> Result<f64, GeometryError>
where
    G: GeometryProvider + ?Sized,
{
    let (from, to) = (origin.waypoint.location, destination.waypoint.location);
    let metres = geometry.distance_between(from, to)?;
    if metres.is_finite() && metres >= 0.0 {
        Ok(metres)
    } else {
        Err(GeometryError::InvalidDistance { from, to })
    }
}
