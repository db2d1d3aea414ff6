//! Greedy first-fit batching.
//!
//! Tasks are taken in descending priority order and dropped into the
//! first batch with room, so urgent work rides at the front of whatever
//! route the batch later becomes.
//!
//! # Complexity
//!
//! O(t · g) fit checks for t tasks across g open groups.

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Task, TaskGroup, Unit};

/// Configuration for the grouping pass.
///
/// # Examples
///
/// ```
/// use u_dispatch::grouping::GroupingConfig;
///
/// let config = GroupingConfig::default().with_proximity_threshold(25.0);
/// assert!((config.proximity_threshold - 25.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GroupingConfig {
    /// Longest sequential chain distance a group may reach once a task
    /// is appended, in distance units.
    pub proximity_threshold: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 50.0,
        }
    }
}

impl GroupingConfig {
    pub fn with_proximity_threshold(mut self, threshold: f64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if self.proximity_threshold <= 0.0 {
            return Err(DispatchError::configuration(format!(
                "proximity_threshold must be positive, got {}",
                self.proximity_threshold
            )));
        }
        Ok(())
    }
}

/// Batches tasks into proximity-bounded groups by greedy first-fit.
///
/// Tasks are visited in descending priority order (stable for ties). Each
/// task joins the first existing group where both the combined weight
/// stays within the capacity ceiling and the group's chain distance after
/// appending stays within the proximity threshold; otherwise it opens a
/// new group of its own. A task too heavy for the ceiling still gets a
/// singleton group, surfacing later as unmatched rather than vanishing.
///
/// The ceiling is the largest capacity among available units, so a group
/// may end up that only the biggest unit could carry.
///
/// # Arguments
///
/// * `tasks` — Pending tasks to batch
/// * `units` — Fleet snapshot, used only to derive the capacity ceiling
/// * `config` — Grouping parameters
///
/// # Examples
///
/// ```
/// use u_dispatch::grouping::{group_tasks, GroupingConfig};
/// use u_dispatch::models::{Point, Task, Unit};
///
/// let tasks = vec![
///     Task::new(1, Point::new(0.0, 0.0), 2.0, 30.0),
///     Task::new(2, Point::new(5.0, 0.0), 2.0, 20.0),
/// ];
/// let units = vec![Unit::new(1, Point::new(0.0, 0.0), 10.0)];
///
/// let groups = group_tasks(&tasks, &units, &GroupingConfig::default())
///     .expect("valid input");
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].task_ids(), vec![1, 2]);
/// ```
pub fn group_tasks(
    tasks: &[Task],
    units: &[Unit],
    config: &GroupingConfig,
) -> DispatchResult<Vec<TaskGroup>> {
    config.validate()?;

    if tasks.is_empty() {
        return Ok(Vec::new());
    }

    let ceiling = units
        .iter()
        .filter(|u| u.available())
        .map(Unit::capacity)
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .ok_or_else(|| DispatchError::input("no available units"))?;

    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority_score()
            .partial_cmp(&a.priority_score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut groups: Vec<TaskGroup> = Vec::new();
    for task in ordered {
        let slot = groups.iter_mut().find(|group| {
            group.total_weight() + task.weight() <= ceiling
                && group.chain_distance_with(task.location()) <= config.proximity_threshold
        });
        match slot {
            Some(group) => group.push(task.clone()),
            None => {
                let mut group = TaskGroup::new();
                group.push(task.clone());
                groups.push(group);
            }
        }
    }

    Ok(groups)
}
