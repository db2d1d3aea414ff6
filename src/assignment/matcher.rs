//! Greedy group-to-unit matching.
//!
//! Groups are served in descending mean-priority order, each taking the
//! highest-scoring unit still free this pass. One unit carries at most
//! one group; groups nobody can carry are handed back, not dropped.

use super::scoring::ScoringWeights;
use crate::error::DispatchResult;
use crate::models::{TaskGroup, Unit};

/// A group matched to a unit.
#[derive(Debug, Clone)]
pub struct GroupMatch {
    /// The matched group.
    pub group: TaskGroup,

    /// Snapshot of the unit that will serve it.
    pub unit: Unit,

    /// Score the winning unit achieved.
    pub score: f64,
}

/// Outcome of a matching pass.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Matched groups, in the order they were served.
    pub matches: Vec<GroupMatch>,

    /// Groups no eligible free unit could carry.
    pub unmatched: Vec<TaskGroup>,
}

/// Matches task groups to units.
///
/// Groups are sorted by descending mean priority (stable for ties) and
/// served greedily. For each group, every available unit not yet used in
/// this pass with capacity for the whole group is scored via
/// [`ScoringWeights::score_unit`]; the best scorer takes the group and is
/// retired for the rest of the pass. Ties keep the earliest unit in the
/// input slice.
///
/// # Examples
///
/// ```
/// use u_dispatch::assignment::{match_groups, ScoringWeights};
/// use u_dispatch::models::{Point, Task, TaskGroup, Unit};
///
/// let mut group = TaskGroup::new();
/// group.push(Task::new(1, Point::new(5.0, 0.0), 2.0, 30.0));
///
/// let units = vec![Unit::new(7, Point::new(0.0, 0.0), 10.0)];
/// let outcome = match_groups(vec![group], &units, &ScoringWeights::default())
///     .expect("valid weights");
///
/// assert_eq!(outcome.matches.len(), 1);
/// assert_eq!(outcome.matches[0].unit.id(), 7);
/// assert!(outcome.unmatched.is_empty());
/// ```
pub fn match_groups(
    mut groups: Vec<TaskGroup>,
    units: &[Unit],
    weights: &ScoringWeights,
) -> DispatchResult<MatchOutcome> {
    weights.validate()?;

    groups.sort_by(|a, b| {
        b.mean_priority()
            .partial_cmp(&a.mean_priority())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut used = vec![false; units.len()];
    let mut matches = Vec::new();
    let mut unmatched = Vec::new();

    for group in groups {
        let centroid = match group.centroid() {
            Some(c) => c,
            None => {
                unmatched.push(group);
                continue;
            }
        };
        let weight = group.total_weight();

        let mut best: Option<(usize, f64)> = None;
        for (index, unit) in units.iter().enumerate() {
            if used[index] || !unit.available() || unit.capacity() < weight {
                continue;
            }
            let score = weights.score_unit(unit, weight, centroid);
            if best.is_none() || score > best.expect("checked is_none").1 {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => {
                used[index] = true;
                matches.push(GroupMatch {
                    group,
                    unit: units[index].clone(),
                    score,
                });
            }
            None => unmatched.push(group),
        }
    }

    Ok(MatchOutcome { matches, unmatched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Task};

    fn group_of(tasks: Vec<Task>) -> TaskGroup {
        let mut group = TaskGroup::new();
        for task in tasks {
            group.push(task);
        }
        group
    }

    fn task(id: usize, x: f64, y: f64, weight: f64, priority: f64) -> Task {
        Task::new(id, Point::new(x, y), weight, priority)
    }

    #[test]
    fn test_single_match() {
        let groups = vec![group_of(vec![task(1, 5.0, 0.0, 2.0, 30.0)])];
        let units = vec![Unit::new(7, Point::new(0.0, 0.0), 10.0)];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].unit.id(), 7);
        assert_eq!(outcome.matches[0].group.task_ids(), vec![1]);
        assert!(outcome.unmatched.is_empty());
    }

    #[test]
    fn test_unit_used_at_most_once() {
        let groups = vec![
            group_of(vec![task(1, 0.0, 0.0, 2.0, 40.0)]),
            group_of(vec![task(2, 1.0, 0.0, 2.0, 10.0)]),
        ];
        let units = vec![Unit::new(1, Point::new(0.0, 0.0), 10.0)];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.unmatched.len(), 1);
        assert_eq!(outcome.matches[0].group.task_ids(), vec![1]);
        assert_eq!(outcome.unmatched[0].task_ids(), vec![2]);
    }

    #[test]
    fn test_higher_priority_group_served_first() {
        // Listed last, but its mean priority wins the only unit.
        let groups = vec![
            group_of(vec![task(1, 0.0, 0.0, 2.0, 10.0)]),
            group_of(vec![task(2, 0.0, 0.0, 2.0, 50.0)]),
        ];
        let units = vec![Unit::new(1, Point::new(0.0, 0.0), 10.0)];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].group.task_ids(), vec![2]);
        assert_eq!(outcome.unmatched[0].task_ids(), vec![1]);
    }

    #[test]
    fn test_capacity_filters_units() {
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 20.0, 10.0)])];
        let units = vec![Unit::new(1, Point::new(0.0, 0.0), 5.0)];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.unmatched.len(), 1);
    }

    #[test]
    fn test_unavailable_units_skipped() {
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 2.0, 10.0)])];
        let units = vec![
            Unit::new(1, Point::new(0.0, 0.0), 10.0).with_available(false),
            Unit::new(2, Point::new(50.0, 0.0), 10.0),
        ];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].unit.id(), 2);
    }

    #[test]
    fn test_closer_unit_wins() {
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 2.0, 10.0)])];
        let units = vec![
            Unit::new(1, Point::new(40.0, 0.0), 10.0),
            Unit::new(2, Point::new(2.0, 0.0), 10.0),
        ];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].unit.id(), 2);
    }

    #[test]
    fn test_tighter_fit_wins() {
        // Same spot and charge; the 5-capacity unit is full at weight 5,
        // the 50-capacity one barely loaded.
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 5.0, 10.0)])];
        let units = vec![
            Unit::new(1, Point::new(0.0, 0.0), 50.0),
            Unit::new(2, Point::new(0.0, 0.0), 5.0),
        ];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].unit.id(), 2);
    }

    #[test]
    fn test_higher_battery_wins() {
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 2.0, 10.0)])];
        let units = vec![
            Unit::new(1, Point::new(0.0, 0.0), 10.0).with_battery_fraction(0.3),
            Unit::new(2, Point::new(0.0, 0.0), 10.0).with_battery_fraction(0.9),
        ];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].unit.id(), 2);
    }

    #[test]
    fn test_score_tie_keeps_earliest_unit() {
        let groups = vec![group_of(vec![task(1, 0.0, 0.0, 2.0, 10.0)])];
        let units = vec![
            Unit::new(3, Point::new(0.0, 0.0), 10.0),
            Unit::new(4, Point::new(0.0, 0.0), 10.0),
        ];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert_eq!(outcome.matches[0].unit.id(), 3);
    }

    #[test]
    fn test_empty_group_goes_unmatched() {
        let groups = vec![TaskGroup::new()];
        let units = vec![Unit::new(1, Point::new(0.0, 0.0), 10.0)];
        let outcome =
            match_groups(groups, &units, &ScoringWeights::default()).expect("valid weights");

        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.unmatched.len(), 1);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = ScoringWeights::default().with_proximity(-1.0);
        assert!(match_groups(Vec::new(), &[], &weights).is_err());
    }
}
