//! Fleet sizing from aggregate demand.
//!
//! - [`FleetConfig`]: throughput assumptions and the fleet cap
//! - [`estimate_fleet`]: per-class unit requirements with a bottleneck
//!   flag

mod sizing;

pub use sizing::{estimate_fleet, ClassDemand, ClassRequirement, FleetConfig, FleetEstimate};
