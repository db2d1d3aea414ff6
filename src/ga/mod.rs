//! Genetic algorithm route refinement.
//!
//! - [`GaConfig`] — Population cap, generation count, mutation rate, seed
//! - [`evolve_route`] — Evolves stop-visiting permutations for one route

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{evolve_route, GaResult};
