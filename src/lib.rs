//! # u-dispatch
//!
//! Delivery-fleet optimization library for drone dispatch: route
//! construction and refinement, task batching, group-to-unit assignment,
//! fleet sizing, and facility placement.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Task, Unit, TaskGroup, Assignment)
//! - [`distance`] — Euclidean/Manhattan metrics and tour-length helpers
//! - [`constructive`] — Nearest-neighbor route construction
//! - [`ga`] — Genetic refinement of visiting orders
//! - [`sa`] — Simulated-annealing refinement of visiting orders
//! - [`grouping`] — Capacity- and proximity-bounded task batching
//! - [`assignment`] — Scored matching of task groups to units
//! - [`fleet`] — Throughput-based fleet sizing
//! - [`facility`] — k-means facility placement
//! - [`stats`] — Derived batch metrics
//! - [`planner`] — One optimization pass wiring the stages together
//! - [`error`] — Error taxonomy
//! - [`random`] — Seeded RNG helpers

pub mod assignment;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod facility;
pub mod fleet;
pub mod ga;
pub mod grouping;
pub mod models;
pub mod planner;
pub mod random;
pub mod sa;
pub mod stats;
