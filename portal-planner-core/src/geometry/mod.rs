//! Geometry boundary: distances and corridor queries.
//!
//! The `GeometryProvider` trait abstracts the map layer the planner sits
//! behind. Callers supply an implementation that answers pairwise distance
//! and "which waypoints lie near this path" queries; the planner never
//! computes geometry on its own. [`WaypointCatalogue`] is the in-memory
//! implementation used by the command-line host.
//!
//! All distances are metres.

mod catalogue;
mod error;
mod provider;

pub use catalogue::WaypointCatalogue;
pub use error::GeometryError;
pub use provider::{GeometryProvider, neighbours_in_link_range};
