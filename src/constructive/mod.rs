//! Constructive heuristics for building initial routes.
//!
//! - [`nearest_neighbor_route`] — Greedy nearest-neighbor closed tour, O(n²)
//! - [`nearest_neighbor_order`] — Same heuristic, returning the stop visiting order

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_order, nearest_neighbor_route};
