//! Derived metrics over a batch of assignments.
//!
//! Reporting reads these numbers directly, so the formulas are fixed:
//! distance is reconstructed from the battery estimates and the
//! consumption constant rather than re-measured from routes.

use serde::{Deserialize, Serialize};

use crate::models::Assignment;

/// Summary metrics for one optimization pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Tasks covered by the batch.
    pub task_count: usize,

    /// Total estimated travel distance, derived from battery cost.
    pub total_distance: f64,

    /// Mean estimated route time in minutes.
    pub average_route_minutes: f64,

    /// Tasks served per distance unit, 0 when no distance was flown.
    pub efficiency: f64,

    /// Tasks per assignment, 0 for an empty batch.
    pub utilization: f64,
}

/// Summarizes a batch of assignments.
///
/// `battery_per_distance` is the consumption constant the battery
/// estimates were produced with; distance is recovered by dividing the
/// summed battery cost by it. A non-positive constant yields zero
/// distance rather than a division fault.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Assignment, Point};
/// use u_dispatch::stats::summarize;
///
/// let assignments = vec![Assignment::new(
///     1,
///     vec![10, 11],
///     vec![Point::new(0.0, 0.0), Point::new(30.0, 40.0), Point::new(0.0, 0.0)],
///     100.0,
///     10.0,
/// )];
///
/// let stats = summarize(&assignments, 0.1);
/// assert_eq!(stats.task_count, 2);
/// assert!((stats.total_distance - 100.0).abs() < 1e-10);
/// ```
pub fn summarize(assignments: &[Assignment], battery_per_distance: f64) -> BatchStatistics {
    let task_count: usize = assignments.iter().map(Assignment::task_count).sum();
    let total_battery: f64 = assignments
        .iter()
        .map(|a| a.estimated_battery_percent)
        .sum();
    let total_minutes: f64 = assignments.iter().map(|a| a.estimated_minutes).sum();

    let total_distance = if battery_per_distance > 0.0 {
        total_battery / battery_per_distance
    } else {
        0.0
    };

    let average_route_minutes = if assignments.is_empty() {
        0.0
    } else {
        total_minutes / assignments.len() as f64
    };

    let efficiency = if total_distance > 0.0 {
        task_count as f64 / total_distance
    } else {
        0.0
    };

    let utilization = if assignments.is_empty() {
        0.0
    } else {
        task_count as f64 / assignments.len() as f64
    };

    BatchStatistics {
        task_count,
        total_distance,
        average_route_minutes,
        efficiency,
        utilization,
    }
}
