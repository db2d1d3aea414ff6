//! Facility location over demand points.
//!
//! - [`FacilityConfig`]: cluster count, coverage radius, convergence knobs
//! - [`place_facilities`]: k-means placement with coverage reporting

mod kmeans;

pub use kmeans::{place_facilities, FacilityConfig, FacilityResult};
