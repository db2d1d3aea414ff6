//! Domain model types for fleet dispatch.
//!
//! Provides the snapshot types a pass consumes (tasks with weights and
//! priorities, units with capacity and battery state), the point type
//! everything is located with, and the group and assignment records a
//! pass produces.

mod assignment;
mod group;
mod point;
mod task;
mod unit;

pub use assignment::Assignment;
pub use group::TaskGroup;
pub use point::{centroid, Point};
pub use task::{priority_score, PriorityClass, Task};
pub use unit::Unit;
