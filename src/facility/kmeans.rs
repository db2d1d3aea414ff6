//! Facility placement via k-means clustering.
//!
//! Demand points are clustered and each cluster's center is proposed as a
//! base location. K = 1 is the closed-form centroid; larger K runs
//! Lloyd's algorithm with centers seeded by sampling input points
//! uniformly with replacement, so duplicate starting centers are valid.
//!
//! # Algorithm
//!
//! 1. Assign every point to its nearest center (ties go to the lowest
//!    center index)
//! 2. Move each center to the mean of its members; empty clusters keep
//!    their center for the round
//! 3. Stop when no center moves more than the tolerance, or after the
//!    iteration cap
//!
//! # Reference
//!
//! Lloyd (1982), "Least squares quantization in PCM".

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::models::{centroid, Point};
use crate::random::seed_or_random;

/// Configuration for facility placement.
///
/// # Defaults
///
/// | Field | Value |
/// |-------|-------|
/// | `k` | 1 |
/// | `coverage_radius` | 50.0 |
/// | `max_iterations` | 100 |
/// | `tolerance` | 0.1 |
/// | `seed` | `None` |
#[derive(Debug, Clone)]
pub struct FacilityConfig {
    /// Number of facilities to place.
    pub k: usize,

    /// Radius within which a demand point counts as covered.
    pub coverage_radius: f64,

    /// Iteration cap for Lloyd's algorithm.
    pub max_iterations: usize,

    /// Convergence threshold: the run stops once no center moves farther
    /// than this in one round.
    pub tolerance: f64,

    /// Random seed for center initialization. `None` draws one from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            k: 1,
            coverage_radius: 50.0,
            max_iterations: 100,
            tolerance: 0.1,
            seed: None,
        }
    }
}

impl FacilityConfig {
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_coverage_radius(mut self, radius: f64) -> Self {
        self.coverage_radius = radius;
        self
    }

    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.k == 0 {
            return Err(DispatchError::configuration("k must be at least 1"));
        }
        if self.coverage_radius <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "coverage_radius must be positive, got {}",
                self.coverage_radius
            )));
        }
        if self.max_iterations == 0 {
            return Err(DispatchError::configuration(
                "max_iterations must be at least 1",
            ));
        }
        if self.tolerance <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Result of a facility-placement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityResult {
    /// Proposed facility locations, always exactly `k` entries.
    pub centers: Vec<Point>,

    /// Demand-point indices per center; clusters may be empty.
    pub clusters: Vec<Vec<usize>>,

    /// Mean distance from each point to its assigned center.
    pub average_distance: f64,

    /// Per-cluster mean member distance, 0 for empty clusters.
    pub cluster_average_distance: Vec<f64>,

    /// Fraction of points within `coverage_radius` of their assigned
    /// center (inclusive).
    pub coverage_fraction: f64,

    /// Lloyd iterations performed; 0 for the closed-form K = 1 case.
    pub iterations: usize,
}

/// Places `k` facilities over the given demand points.
///
/// # Arguments
///
/// * `points` — Demand locations; must not be empty
/// * `config` — Placement parameters
///
/// # Examples
///
/// ```
/// use u_dispatch::facility::{place_facilities, FacilityConfig};
/// use u_dispatch::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(10.0, 10.0),
/// ];
///
/// let result = place_facilities(&points, &FacilityConfig::default())
///     .expect("valid input");
/// assert_eq!(result.centers.len(), 1);
/// assert!((result.centers[0].x - 5.0).abs() < 1e-10);
/// assert_eq!(result.iterations, 0);
/// ```
pub fn place_facilities(
    points: &[Point],
    config: &FacilityConfig,
) -> DispatchResult<FacilityResult> {
    config.validate()?;

    if points.is_empty() {
        return Err(DispatchError::input("no demand points"));
    }

    if config.k == 1 {
        let center = centroid(points).expect("points checked non-empty");
        let assignment = vec![0usize; points.len()];
        return Ok(summarize(points, vec![center], &assignment, config, 0));
    }

    let mut rng = seed_or_random(config.seed);
    let mut centers: Vec<Point> = (0..config.k)
        .map(|_| points[rng.random_range(0..points.len())])
        .collect();

    let mut assignment = vec![0usize; points.len()];
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;

        for (slot, point) in assignment.iter_mut().zip(points) {
            *slot = nearest_center(*point, &centers);
        }

        let mut sums = vec![(0.0f64, 0.0f64); config.k];
        let mut counts = vec![0usize; config.k];
        for (&cluster, point) in assignment.iter().zip(points) {
            sums[cluster].0 += point.x;
            sums[cluster].1 += point.y;
            counts[cluster] += 1;
        }

        let mut max_movement = 0.0f64;
        for index in 0..config.k {
            if counts[index] == 0 {
                continue;
            }
            let moved = Point::new(
                sums[index].0 / counts[index] as f64,
                sums[index].1 / counts[index] as f64,
            );
            max_movement = max_movement.max(centers[index].distance_to(moved));
            centers[index] = moved;
        }

        if max_movement <= config.tolerance {
            break;
        }
    }

    Ok(summarize(points, centers, &assignment, config, iterations))
}

/// Index of the nearest center; ties keep the lowest index.
fn nearest_center(point: Point, centers: &[Point]) -> usize {
    let mut best = 0usize;
    let mut best_distance = point.distance_to(centers[0]);
    for (index, center) in centers.iter().enumerate().skip(1) {
        let distance = point.distance_to(*center);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Builds the result metrics from a final assignment.
fn summarize(
    points: &[Point],
    centers: Vec<Point>,
    assignment: &[usize],
    config: &FacilityConfig,
    iterations: usize,
) -> FacilityResult {
    let k = centers.len();
    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); k];
    let mut distance_sums = vec![0.0f64; k];
    let mut total_distance = 0.0;
    let mut covered = 0usize;

    for (index, (&cluster, point)) in assignment.iter().zip(points).enumerate() {
        let distance = point.distance_to(centers[cluster]);
        clusters[cluster].push(index);
        distance_sums[cluster] += distance;
        total_distance += distance;
        if distance <= config.coverage_radius {
            covered += 1;
        }
    }

    let cluster_average_distance: Vec<f64> = clusters
        .iter()
        .zip(&distance_sums)
        .map(|(members, sum)| {
            if members.is_empty() {
                0.0
            } else {
                sum / members.len() as f64
            }
        })
        .collect();

    FacilityResult {
        centers,
        clusters,
        average_distance: total_distance / points.len() as f64,
        cluster_average_distance,
        coverage_fraction: covered as f64 / points.len() as f64,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_rejected() {
        assert!(place_facilities(&[], &FacilityConfig::default()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let points = vec![Point::new(0.0, 0.0)];
        assert!(place_facilities(&points, &FacilityConfig::default().with_k(0)).is_err());
        assert!(
            place_facilities(&points, &FacilityConfig::default().with_coverage_radius(0.0))
                .is_err()
        );
        assert!(
            place_facilities(&points, &FacilityConfig::default().with_tolerance(-1.0)).is_err()
        );
    }

    #[test]
    fn test_single_center_is_centroid() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let result = place_facilities(&points, &FacilityConfig::default()).expect("valid input");

        assert_eq!(result.centers.len(), 1);
        assert!((result.centers[0].x - 5.0).abs() < 1e-10);
        assert!((result.centers[0].y - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(result.clusters, vec![vec![0, 1, 2]]);
        assert_eq!(result.iterations, 0);

        let expected: f64 = points
            .iter()
            .map(|p| p.distance_to(result.centers[0]))
            .sum::<f64>()
            / 3.0;
        assert!((result.average_distance - expected).abs() < 1e-10);
        assert!((result.cluster_average_distance[0] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_is_inclusive() {
        // Mean of (0,0), (6,0), (30,0) is (12,0); distances 12, 6, 18.
        // Radius 12 covers the first two, the boundary point included.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        let config = FacilityConfig::default().with_coverage_radius(12.0);
        let result = place_facilities(&points, &config).expect("valid input");

        assert!((result.coverage_fraction - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_identical_points_converge_immediately() {
        let points = vec![Point::new(4.0, 4.0); 3];
        let config = FacilityConfig::default().with_k(2).with_seed(42);
        let result = place_facilities(&points, &config).expect("valid input");

        assert_eq!(result.centers.len(), 2);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.clusters[0], vec![0, 1, 2]);
        assert!(result.clusters[1].is_empty());
        assert_eq!(result.average_distance, 0.0);
        assert_eq!(result.coverage_fraction, 1.0);
        assert_eq!(result.cluster_average_distance, vec![0.0, 0.0]);
    }

    #[test]
    fn test_partition_covers_every_point() {
        let points: Vec<Point> = (0..20)
            .map(|i| Point::new((i * 13 % 40) as f64, (i * 29 % 40) as f64))
            .collect();
        let config = FacilityConfig::default().with_k(3).with_seed(7);
        let result = place_facilities(&points, &config).expect("valid input");

        assert_eq!(result.centers.len(), 3);
        assert_eq!(result.clusters.len(), 3);
        let mut seen: Vec<usize> = result.clusters.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..20).collect::<Vec<_>>());
        assert!(result.iterations >= 1 && result.iterations <= 100);
    }

    #[test]
    fn test_more_centers_than_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let config = FacilityConfig::default().with_k(5).with_seed(3);
        let result = place_facilities(&points, &config).expect("valid input");

        assert_eq!(result.centers.len(), 5);
        assert_eq!(result.cluster_average_distance.len(), 5);
        let total: usize = result.clusters.iter().map(Vec::len).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let points: Vec<Point> = (0..15)
            .map(|i| Point::new((i * 17 % 60) as f64, (i * 23 % 60) as f64))
            .collect();
        let config = FacilityConfig::default().with_k(4).with_seed(99);
        let a = place_facilities(&points, &config).expect("valid input");
        let b = place_facilities(&points, &config).expect("valid input");

        assert_eq!(a.clusters, b.clusters);
        assert_eq!(a.iterations, b.iterations);
        for (ca, cb) in a.centers.iter().zip(&b.centers) {
            assert!((ca.x - cb.x).abs() < 1e-12);
            assert!((ca.y - cb.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_separated_blobs_converge() {
        let mut points = Vec::new();
        for i in 0..5 {
            points.push(Point::new(i as f64, 0.0));
            points.push(Point::new(100.0 + i as f64, 0.0));
        }
        let config = FacilityConfig::default().with_k(2).with_seed(42);
        let result = place_facilities(&points, &config).expect("valid input");

        assert!(result.iterations < 100, "failed to converge");
        let total: usize = result.clusters.iter().map(Vec::len).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn test_nearest_center_tie_keeps_lowest_index() {
        let centers = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(nearest_center(Point::new(5.0, 0.0), &centers), 0);
    }
}
