//! Route optimizer and planning session for the portal route planner.
//!
//! [`optimize`] orders assessed candidates under one of three objectives:
//! nearest-neighbour distance, descending AP potential, or greedy XM
//! efficiency within a budget. [`RouteSession`] wraps it with the state a
//! planning interaction needs: the configured play style and objective, the
//! running XM budget, the budget trace and the last planned route.
//!
//! Everything is synchronous. A session is mutated only through `&mut self`,
//! so sharing one across threads requires external synchronisation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod session;
mod statistics;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use optimizer::{OptimizationContext, OptimizationResult, OptimizeError, optimize};
pub use session::{PlanError, RouteSession};
pub use statistics::RouteStatistics;
