//! Closed planning axes: play style, optimisation objective and travel mode.
//!
//! The enums give compile-time safety where the planner would otherwise
//! compare strings.
//!
//! # Examples
//! ```
//! use portal_planner_core::{ObjectiveKind, PlayStyle};
//!
//! assert_eq!(PlayStyle::Fields.as_str(), "fields");
//! assert_eq!("xm".parse::<ObjectiveKind>(), Ok(ObjectiveKind::Energy));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bundle of assumptions about which actions happen at each waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PlayStyle {
    /// Hack only; nothing is deployed.
    #[default]
    Quick,
    /// Glyph hack and top the portal up to eight resonators.
    Full,
    /// Full deploy plus links and fields to nearby portals.
    Fields,
}

impl PlayStyle {
    /// Return the play style as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Full => "full",
            Self::Fields => "fields",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "full" => Ok(Self::Full),
            "fields" => Ok(Self::Fields),
            _ => Err(format!("unknown play style '{s}'")),
        }
    }
}

/// Objective selecting which optimizer strategy orders the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ObjectiveKind {
    /// Nearest-neighbour ordering by travel distance.
    #[default]
    Distance,
    /// Highest AP potential first.
    #[cfg_attr(feature = "serde", serde(alias = "ap"))]
    ActionPoints,
    /// Greedy XM efficiency under a running budget.
    #[cfg_attr(feature = "serde", serde(alias = "xm"))]
    Energy,
}

impl ObjectiveKind {
    /// Return the objective as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::ActionPoints => "action-points",
            Self::Energy => "energy",
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "action-points" | "ap" => Ok(Self::ActionPoints),
            "energy" | "xm" => Ok(Self::Energy),
            _ => Err(format!("unknown objective '{s}'")),
        }
    }
}

/// How the agent moves between waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// By bicycle; each arrival may wait at a traffic light.
    Biking,
    /// By car; each arrival needs a parking stop.
    Driving,
}

impl TravelMode {
    /// Return the travel mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Biking => "biking",
            Self::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "biking" => Ok(Self::Biking),
            "driving" => Ok(Self::Driving),
            _ => Err(format!("unknown travel mode '{s}'")),
        }
    }
}
