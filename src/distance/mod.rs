//! Distance metrics and route-length measures.
//!
//! The pipeline measures everything with Euclidean distance; Manhattan is
//! offered as an alternate metric for callers working over grid-like
//! street networks. Both satisfy `d(p, p) = 0` and symmetry.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// Distance metric selector.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::Metric;
/// use u_dispatch::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((Metric::Euclidean.measure(a, b) - 5.0).abs() < 1e-10);
/// assert!((Metric::Manhattan.measure(a, b) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Euclidean,
    Manhattan,
}

impl Metric {
    /// Measures the distance between two points under this metric.
    pub fn measure(&self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }
}

/// Euclidean (straight-line) distance.
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance_to(b)
}

/// Manhattan (axis-aligned) distance.
pub fn manhattan(a: Point, b: Point) -> f64 {
    a.manhattan_to(b)
}

/// Sum of consecutive pairwise distances along a point sequence.
///
/// Zero for sequences of fewer than two points.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::path_length;
/// use u_dispatch::models::Point;
///
/// let path = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 4.0)];
/// assert!((path_length(&path) - 7.0).abs() < 1e-10);
/// ```
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Length of the closed tour `origin → stops[order[0]] → … →
/// stops[order[last]] → origin`.
///
/// An empty `order` yields 0. Entries of `order` must index into `stops`.
pub fn closed_tour_length(origin: Point, stops: &[Point], order: &[usize]) -> f64 {
    if order.is_empty() {
        return 0.0;
    }
    let mut length = origin.distance_to(stops[order[0]]);
    for w in order.windows(2) {
        length += stops[w[0]].distance_to(stops[w[1]]);
    }
    length + stops[order[order.len() - 1]].distance_to(origin)
}
