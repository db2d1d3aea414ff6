//! Capacity- and proximity-bounded task batching.
//!
//! - [`GroupingConfig`]: proximity threshold for batch chains
//! - [`group_tasks`]: greedy first-fit batching in priority order

mod first_fit;

pub use first_fit::{group_tasks, GroupingConfig};
