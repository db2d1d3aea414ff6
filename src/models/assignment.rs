//! Assignment record produced by a dispatch pass.

use serde::{Deserialize, Serialize};

use super::Point;

/// One unit's workload for a pass: the tasks it serves, the closed route
/// visiting them, and the derived cost estimates.
///
/// The route starts and ends at the unit's position at pass time. Battery
/// cost is expressed in percent of a full charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unit the workload was matched to.
    pub unit_id: usize,
    /// Tasks served, in route visiting order.
    pub task_ids: Vec<usize>,
    /// Closed route: `route[0] == route[last]` = the unit's position.
    pub route: Vec<Point>,
    /// Estimated travel plus service time in minutes.
    pub estimated_minutes: f64,
    /// Estimated battery cost in percent of a full charge.
    pub estimated_battery_percent: f64,
}

impl Assignment {
    /// Creates an assignment record.
    pub fn new(
        unit_id: usize,
        task_ids: Vec<usize>,
        route: Vec<Point>,
        estimated_minutes: f64,
        estimated_battery_percent: f64,
    ) -> Self {
        Self {
            unit_id,
            task_ids,
            route,
            estimated_minutes,
            estimated_battery_percent,
        }
    }

    /// Number of tasks served by this assignment.
    pub fn task_count(&self) -> usize {
        self.task_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_new() {
        let route = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        let a = Assignment::new(7, vec![1], route, 12.0, 0.2);
        assert_eq!(a.unit_id, 7);
        assert_eq!(a.task_count(), 1);
        assert_eq!(a.route.len(), 3);
        assert_eq!(a.route[0], a.route[2]);
    }
}
