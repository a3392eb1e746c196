//! Static gameplay tables: AP rewards, XM prices, time estimates and link
//! ranges.
//!
//! Distances are metres and durations are whole seconds throughout.

use std::time::Duration;

use crate::waypoint::MAX_LEVEL;

/// Default corridor half-width: the distance an agent can interact from.
pub const PORTAL_RANGE_M: f64 = 40.0;

/// AP awarded per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApValues {
    /// Deploying one resonator.
    pub deploy_resonator: u64,
    /// Bonus for the first resonator on a neutral portal.
    pub deploy_first: u64,
    /// Bonus for the eighth resonator.
    pub deploy_last: u64,
    /// Creating a link.
    pub create_link: u64,
    /// Creating a control field.
    pub create_field: u64,
    /// Hacking an enemy portal.
    pub hack_enemy: u64,
    /// Destroying an enemy resonator.
    pub destroy_resonator: u64,
    /// Destroying an enemy link.
    pub destroy_link: u64,
    /// Destroying an enemy field.
    pub destroy_field: u64,
    /// Upgrading a resonator.
    pub upgrade_resonator: u64,
}

/// AP reward table.
pub const AP_VALUES: ApValues = ApValues {
    deploy_resonator: 125,
    deploy_first: 500,
    deploy_last: 250,
    create_link: 313,
    create_field: 1250,
    hack_enemy: 100,
    destroy_resonator: 75,
    destroy_link: 187,
    destroy_field: 750,
    upgrade_resonator: 65,
};

/// Agent XM capacity at selected agent levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxXm {
    /// Level 1 agent.
    pub l1: u64,
    /// Level 8 agent; the planner's default budget.
    pub l8: u64,
    /// Level 16 agent.
    pub l16: u64,
}

/// XM spent or earned per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmValues {
    /// Deploying one resonator.
    pub deploy_cost: u64,
    /// Plain hack.
    pub hack_gain: u64,
    /// Glyph hack.
    pub glyph_hack_gain: u64,
    /// Recycling one item.
    pub recycle_gain: u64,
    /// Rough price of one outbound link.
    pub link_estimate: u64,
    /// Agent capacity.
    pub max_xm: MaxXm,
}

/// XM price table.
pub const XM_VALUES: XmValues = XmValues {
    deploy_cost: 50,
    hack_gain: 100,
    glyph_hack_gain: 250,
    recycle_gain: 80,
    link_estimate: 50,
    max_xm: MaxXm {
        l1: 3000,
        l8: 10000,
        l16: 20000,
    },
};

/// Extra waits incurred on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopTimes {
    /// Waiting at a traffic light when biking.
    pub traffic_light: Duration,
    /// Parking when driving.
    pub parking: Duration,
    /// Hack cooldown before the same portal can be hacked again.
    pub cooldown: Duration,
}

/// Time spent on actions and travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeEstimates {
    /// A plain hack.
    pub quick_hack: Duration,
    /// A glyph hack.
    pub glyph_hack: Duration,
    /// Deploying a full set of resonators.
    pub full_deploy: Duration,
    /// Deploying and throwing links.
    pub field_deploy: Duration,
    /// Walking speed in metres per second.
    pub walking_speed_mps: f64,
    /// Biking speed in metres per second (about 15 km/h).
    pub biking_speed_mps: f64,
    /// Driving speed in metres per second.
    pub driving_speed_mps: f64,
    /// Per-arrival waits.
    pub stop_time: StopTimes,
}

/// Time estimate table.
pub const TIME_ESTIMATES: TimeEstimates = TimeEstimates {
    quick_hack: Duration::from_secs(15),
    glyph_hack: Duration::from_secs(45),
    full_deploy: Duration::from_secs(90),
    field_deploy: Duration::from_secs(120),
    walking_speed_mps: 1.4,
    biking_speed_mps: 4.2,
    driving_speed_mps: 8.3,
    stop_time: StopTimes {
        traffic_light: Duration::from_secs(30),
        parking: Duration::from_secs(60),
        cooldown: Duration::from_secs(300),
    },
};

/// Maximum link range in metres, indexed by `level - 1`.
pub const MAX_LINK_RANGE_M: [u32; MAX_LEVEL as usize] = [
    5_121, 10_241, 20_481, 40_961, 81_921, 163_842, 327_684, 655_367,
];

/// Link range in metres for a portal level, or `None` outside `1..=8`.
///
/// # Examples
/// ```
/// use portal_planner_core::link_range_for_level;
///
/// assert_eq!(link_range_for_level(1), Some(5121.0));
/// assert_eq!(link_range_for_level(8), Some(655_367.0));
/// assert_eq!(link_range_for_level(0), None);
/// ```
#[must_use]
pub fn link_range_for_level(level: u8) -> Option<f64> {
    let index = usize::from(level.checked_sub(1)?);
    MAX_LINK_RANGE_M.get(index).copied().map(f64::from)
}
