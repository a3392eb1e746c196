//! Facade crate for the portal route planner.
//!
//! This crate re-exports the core domain types and exposes the route
//! optimizer and planning session behind the `optimizer` feature.

#![forbid(unsafe_code)]

pub use portal_planner_core::{
    Candidate, GeometryError, GeometryProvider, ObjectiveKind, PlayStyle, RouteTimeEstimate,
    TravelMode, Waypoint, WaypointCatalogue, WaypointError, WaypointFigures, WaypointId,
    ap_potential, assess_waypoint, estimate_route_time, xm_cost, xm_gain,
};

#[cfg(feature = "optimizer")]
pub use portal_planner_optimizer::{
    OptimizationContext, OptimizationResult, OptimizeError, PlanError, RouteSession,
    RouteStatistics, optimize,
};
