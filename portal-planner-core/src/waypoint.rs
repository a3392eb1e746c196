//! Waypoints ("portals") supplied by the caller for one planning request.

use std::fmt;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest portal level.
pub const MAX_LEVEL: u8 = 8;
/// Number of resonator slots on a portal.
pub const RESONATOR_SLOTS: u8 = 8;
/// Upper bound of the energy percentage.
pub const MAX_ENERGY: u8 = 100;

/// Opaque waypoint key, typically the portal GUID.
///
/// # Examples
/// ```
/// use portal_planner_core::WaypointId;
///
/// let id = WaypointId::from("a1b2.16");
/// assert_eq!(id.as_str(), "a1b2.16");
/// assert_eq!(id.to_string(), "a1b2.16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WaypointId(String);

impl WaypointId {
    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WaypointId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WaypointId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned when a waypoint attribute is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaypointError {
    /// Level outside `1..=8`.
    #[error("portal level must be between 1 and 8, found {found}")]
    InvalidLevel {
        /// Rejected level.
        found: u8,
    },
    /// Energy percentage above 100.
    #[error("portal energy must be between 0 and 100 percent, found {found}")]
    InvalidEnergy {
        /// Rejected energy percentage.
        found: u8,
    },
    /// More resonators than the portal has slots.
    #[error("resonator count must be between 0 and 8, found {found}")]
    InvalidResonators {
        /// Rejected resonator count.
        found: u8,
    },
}

/// Immutable snapshot of a portal near the travel corridor.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use portal_planner_core::{Waypoint, WaypointError};
///
/// # fn main() -> Result<(), WaypointError> {
/// let waypoint = Waypoint::new("fountain", Coord { x: -0.1276, y: 51.5072 })
///     .with_level(6)?
///     .with_energy(81)?
///     .with_resonators(4)?
///     .with_captured(true);
/// assert_eq!(waypoint.level, 6);
/// assert_eq!(waypoint.missing_resonators(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// Opaque identity.
    pub id: WaypointId,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Portal level in `1..=8`.
    pub level: u8,
    /// Current energy percentage in `0..=100`.
    pub energy: u8,
    /// Deployed resonators in `0..=8`.
    pub resonators: u8,
    /// Whether the agent has captured this portal before.
    #[cfg_attr(feature = "serde", serde(default))]
    pub captured: bool,
}

impl Waypoint {
    /// Construct a level 1 waypoint with no energy, no resonators and no
    /// capture history.
    #[must_use]
    pub fn new(id: impl Into<WaypointId>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            location,
            level: 1,
            energy: 0,
            resonators: 0,
            captured: false,
        }
    }

    /// Set the portal level.
    ///
    /// # Errors
    /// Returns [`WaypointError::InvalidLevel`] outside `1..=8`.
    pub fn with_level(mut self, level: u8) -> Result<Self, WaypointError> {
        if level == 0 || level > MAX_LEVEL {
            return Err(WaypointError::InvalidLevel { found: level });
        }
        self.level = level;
        Ok(self)
    }

    /// Set the energy percentage.
    ///
    /// # Errors
    /// Returns [`WaypointError::InvalidEnergy`] above 100.
    pub fn with_energy(mut self, energy: u8) -> Result<Self, WaypointError> {
        if energy > MAX_ENERGY {
            return Err(WaypointError::InvalidEnergy { found: energy });
        }
        self.energy = energy;
        Ok(self)
    }

    /// Set the deployed resonator count.
    ///
    /// # Errors
    /// Returns [`WaypointError::InvalidResonators`] above 8.
    pub fn with_resonators(mut self, resonators: u8) -> Result<Self, WaypointError> {
        if resonators > RESONATOR_SLOTS {
            return Err(WaypointError::InvalidResonators { found: resonators });
        }
        self.resonators = resonators;
        Ok(self)
    }

    /// Mark the waypoint as captured (or not).
    #[must_use]
    pub const fn with_captured(mut self, captured: bool) -> Self {
        self.captured = captured;
        self
    }

    /// Re-check every attribute, e.g. after deserialising a payload.
    ///
    /// # Errors
    /// Returns the first out-of-range attribute.
    pub const fn validate(&self) -> Result<(), WaypointError> {
        if self.level == 0 || self.level > MAX_LEVEL {
            return Err(WaypointError::InvalidLevel { found: self.level });
        }
        if self.energy > MAX_ENERGY {
            return Err(WaypointError::InvalidEnergy { found: self.energy });
        }
        if self.resonators > RESONATOR_SLOTS {
            return Err(WaypointError::InvalidResonators {
                found: self.resonators,
            });
        }
        Ok(())
    }

    /// Empty resonator slots, saturating at zero.
    #[must_use]
    pub const fn missing_resonators(&self) -> u8 {
        RESONATOR_SLOTS.saturating_sub(self.resonators)
    }
}
