//! Simulated Annealing for route refinement.
//!
//! - [`SaConfig`]: temperature schedule and iteration count
//! - [`anneal_route`]: refines a visiting order by random swaps under
//!   Metropolis acceptance
//!
//! # Reference
//!
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//! Annealing".

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{anneal_route, SaResult};
