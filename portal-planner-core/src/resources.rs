//! Resource model: what a visit costs and yields.
//!
//! XM (energy) is spent on deploying and linking and earned by hacking and
//! recharging. AP (score) potential estimates what an agent can earn by
//! clearing and rebuilding a portal. Every function here is pure, so the
//! figures for the same inputs never change between calls or threads.

use crate::geometry::{GeometryError, GeometryProvider, neighbours_in_link_range};
use crate::style::PlayStyle;
use crate::tables::{AP_VALUES, XM_VALUES};
use crate::waypoint::{RESONATOR_SLOTS, Waypoint};

/// XM spent visiting `waypoint` under `play_style`.
///
/// `neighbours` is the number of other portals within the waypoint's link
/// range; only [`PlayStyle::Fields`] uses it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{PlayStyle, Waypoint, xm_cost};
///
/// let waypoint = Waypoint::new("p", Coord { x: 0.0, y: 0.0 }).with_resonators(4).unwrap();
/// assert_eq!(xm_cost(&waypoint, PlayStyle::Quick, 3), 0);
/// assert_eq!(xm_cost(&waypoint, PlayStyle::Full, 3), 200);
/// assert_eq!(xm_cost(&waypoint, PlayStyle::Fields, 3), 350);
/// ```
#[must_use]
pub fn xm_cost(waypoint: &Waypoint, play_style: PlayStyle, neighbours: usize) -> u64 {
    let deploy = XM_VALUES
        .deploy_cost
        .saturating_mul(u64::from(waypoint.missing_resonators()));
    match play_style {
        PlayStyle::Quick => 0,
        PlayStyle::Full => deploy,
        PlayStyle::Fields => {
            let links = u64::try_from(neighbours).unwrap_or(u64::MAX);
            deploy.saturating_add(links.saturating_mul(XM_VALUES.link_estimate))
        }
    }
}

/// XM earned visiting `waypoint` under `play_style`.
///
/// The hack yield depends on the play style; the recharge bonus of half the
/// portal's energy percentage (rounded down) always applies.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{PlayStyle, Waypoint, xm_gain};
///
/// let waypoint = Waypoint::new("p", Coord { x: 0.0, y: 0.0 }).with_energy(81).unwrap();
/// assert_eq!(xm_gain(&waypoint, PlayStyle::Quick), 140);
/// assert_eq!(xm_gain(&waypoint, PlayStyle::Fields), 290);
/// ```
#[must_use]
pub fn xm_gain(waypoint: &Waypoint, play_style: PlayStyle) -> u64 {
    let hack = match play_style {
        PlayStyle::Quick => XM_VALUES.hack_gain,
        PlayStyle::Full | PlayStyle::Fields => XM_VALUES.glyph_hack_gain,
    };
    hack.saturating_add(recharge_bonus(waypoint.energy))
}

#[expect(
    clippy::integer_division,
    reason = "the recharge bonus is half the energy percentage, rounded down"
)]
fn recharge_bonus(energy: u8) -> u64 {
    u64::from(energy) / 2
}

/// AP an agent can expect from clearing and rebuilding `waypoint`.
///
/// The estimate grows strictly with both resonator count (more to destroy)
/// and level (more to upgrade). A fully deployed portal is assumed to anchor
/// one link and one field.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{Waypoint, ap_potential};
///
/// let bare = Waypoint::new("a", Coord { x: 0.0, y: 0.0 });
/// let built = bare.clone().with_resonators(6).unwrap();
/// assert!(ap_potential(&built) > ap_potential(&bare));
/// ```
#[must_use]
pub fn ap_potential(waypoint: &Waypoint) -> u64 {
    let destroy = AP_VALUES
        .destroy_resonator
        .saturating_mul(u64::from(waypoint.resonators));
    let anchored = if waypoint.resonators >= RESONATOR_SLOTS {
        AP_VALUES.destroy_link + AP_VALUES.destroy_field
    } else {
        0
    };
    let rebuild = AP_VALUES.deploy_first
        + AP_VALUES
            .deploy_resonator
            .saturating_mul(u64::from(RESONATOR_SLOTS))
        + AP_VALUES.deploy_last;
    let upgrade = AP_VALUES
        .upgrade_resonator
        .saturating_mul(u64::from(waypoint.level.saturating_sub(1)));
    AP_VALUES.hack_enemy + destroy + anchored + rebuild + upgrade
}

/// Derived figures for one waypoint under one play style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaypointFigures {
    /// XM spent.
    pub cost: u64,
    /// XM earned.
    pub gain: u64,
    /// AP potential.
    pub ap_potential: u64,
}

impl WaypointFigures {
    /// Compute all figures for `waypoint`.
    #[must_use]
    pub fn assess(waypoint: &Waypoint, play_style: PlayStyle, neighbours: usize) -> Self {
        Self {
            cost: xm_cost(waypoint, play_style, neighbours),
            gain: xm_gain(waypoint, play_style),
            ap_potential: ap_potential(waypoint),
        }
    }

    /// Signed XM balance of the visit, `gain - cost`.
    #[must_use]
    pub fn net(&self) -> i64 {
        let gain = i64::try_from(self.gain).unwrap_or(i64::MAX);
        let cost = i64::try_from(self.cost).unwrap_or(i64::MAX);
        gain.saturating_sub(cost)
    }
}

/// A waypoint paired with its figures; the unit the optimizer orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The waypoint itself.
    pub waypoint: Waypoint,
    /// Its figures under the session's play style.
    pub figures: WaypointFigures,
}

/// Assess a waypoint, asking `geometry` for its neighbours when the play
/// style needs them.
///
/// # Errors
/// Propagates [`GeometryError`] from the neighbour lookup.
pub fn assess_waypoint<G>(
    geometry: &G,
    waypoint: Waypoint,
    play_style: PlayStyle,
) -> Result<Candidate, GeometryError>
where
    G: GeometryProvider + ?Sized,
{
    let neighbours = match play_style {
        PlayStyle::Fields => neighbours_in_link_range(geometry, &waypoint)?,
        PlayStyle::Quick | PlayStyle::Full => 0,
    };
    let figures = WaypointFigures::assess(&waypoint, play_style, neighbours);
    Ok(Candidate { waypoint, figures })
}
