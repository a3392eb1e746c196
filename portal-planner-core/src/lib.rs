//! Core domain types for the portal route planner.
//!
//! The crate holds the waypoint model, the static gameplay tables, the
//! resource model that prices a visit in XM and AP, and the geometry boundary
//! the optimizer consumes. Everything here is synchronous and free of hidden
//! state: the same inputs always produce the same figures.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geometry;
pub mod resources;
pub mod style;
pub mod tables;
pub mod timing;
pub mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geometry::{GeometryError, GeometryProvider, WaypointCatalogue, neighbours_in_link_range};
pub use resources::{
    Candidate, WaypointFigures, ap_potential, assess_waypoint, xm_cost, xm_gain,
};
pub use style::{ObjectiveKind, PlayStyle, TravelMode};
pub use tables::link_range_for_level;
pub use timing::{RouteTimeEstimate, estimate_route_time};
pub use waypoint::{Waypoint, WaypointError, WaypointId};
