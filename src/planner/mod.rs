//! One optimization pass wiring grouping, assignment, and route search
//! together.
//!
//! - [`PlannerConfig`]: stage parameters and estimate constants
//! - [`plan_pass`]: snapshots in, [`DispatchPlan`] out

mod config;
mod pass;

pub use config::{PlannerConfig, RouteAlgorithm};
pub use pass::{plan_pass, DispatchPlan};
