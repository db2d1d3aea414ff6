//! Task group (delivery batch) type.

use serde::{Deserialize, Serialize};

use super::{centroid, Point, Task};

/// An ordered batch of tasks intended for a single unit.
///
/// Groups are built by the grouping pass; order is append order and the
/// chain distance is measured along it. Derived quantities are computed
/// on demand from the member snapshots.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Task, TaskGroup};
///
/// let mut g = TaskGroup::new();
/// g.push(Task::new(1, Point::new(0.0, 0.0), 2.0, 30.0));
/// g.push(Task::new(2, Point::new(3.0, 4.0), 1.5, 20.0));
/// assert_eq!(g.len(), 2);
/// assert!((g.total_weight() - 3.5).abs() < 1e-10);
/// assert!((g.chain_distance() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskGroup {
    tasks: Vec<Task>,
}

impl TaskGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task to the group.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Member tasks in append order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Member task IDs in append order.
    pub fn task_ids(&self) -> Vec<usize> {
        self.tasks.iter().map(|t| t.id()).collect()
    }

    /// Member drop-off locations in append order.
    pub fn locations(&self) -> Vec<Point> {
        self.tasks.iter().map(|t| t.location()).collect()
    }

    /// Number of member tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum of member payload weights.
    pub fn total_weight(&self) -> f64 {
        self.tasks.iter().map(|t| t.weight()).sum()
    }

    /// Mean member priority score, or 0 for an empty group.
    pub fn mean_priority(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.tasks.iter().map(|t| t.priority_score()).sum();
        sum / self.tasks.len() as f64
    }

    /// Arithmetic mean of member locations, or `None` for an empty group.
    pub fn centroid(&self) -> Option<Point> {
        centroid(&self.locations())
    }

    /// Sum of consecutive pairwise distances along the member order.
    ///
    /// Zero for groups of fewer than two tasks.
    pub fn chain_distance(&self) -> f64 {
        self.tasks
            .windows(2)
            .map(|w| w[0].location().distance_to(w[1].location()))
            .sum()
    }

    /// Chain distance the group would have after appending a task at the
    /// given location.
    pub fn chain_distance_with(&self, location: Point) -> f64 {
        match self.tasks.last() {
            Some(last) => self.chain_distance() + last.location().distance_to(location),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: usize, x: f64, y: f64, weight: f64, priority: f64) -> Task {
        Task::new(id, Point::new(x, y), weight, priority)
    }

    #[test]
    fn test_empty_group() {
        let g = TaskGroup::new();
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert_eq!(g.total_weight(), 0.0);
        assert_eq!(g.mean_priority(), 0.0);
        assert_eq!(g.chain_distance(), 0.0);
        assert!(g.centroid().is_none());
    }

    #[test]
    fn test_push_and_ids() {
        let mut g = TaskGroup::new();
        g.push(task(5, 0.0, 0.0, 1.0, 10.0));
        g.push(task(9, 1.0, 0.0, 2.0, 20.0));
        assert_eq!(g.task_ids(), vec![5, 9]);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_total_weight_and_mean_priority() {
        let mut g = TaskGroup::new();
        g.push(task(1, 0.0, 0.0, 1.5, 10.0));
        g.push(task(2, 1.0, 0.0, 2.5, 30.0));
        assert!((g.total_weight() - 4.0).abs() < 1e-10);
        assert!((g.mean_priority() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_centroid() {
        let mut g = TaskGroup::new();
        g.push(task(1, 0.0, 0.0, 1.0, 10.0));
        g.push(task(2, 4.0, 2.0, 1.0, 10.0));
        let c = g.centroid().expect("non-empty");
        assert!((c.x - 2.0).abs() < 1e-10);
        assert!((c.y - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_chain_distance_line() {
        let mut g = TaskGroup::new();
        g.push(task(1, 0.0, 0.0, 1.0, 10.0));
        g.push(task(2, 3.0, 0.0, 1.0, 10.0));
        g.push(task(3, 7.0, 0.0, 1.0, 10.0));
        assert!((g.chain_distance() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_chain_distance_with_candidate() {
        let mut g = TaskGroup::new();
        assert_eq!(g.chain_distance_with(Point::new(9.0, 9.0)), 0.0);

        g.push(task(1, 0.0, 0.0, 1.0, 10.0));
        g.push(task(2, 3.0, 0.0, 1.0, 10.0));
        let extended = g.chain_distance_with(Point::new(3.0, 4.0));
        assert!((extended - 7.0).abs() < 1e-10);
    }
}
