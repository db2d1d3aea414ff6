//! One optimization pass.
//!
//! Wires the stages together: filter deployable units, batch tasks into
//! groups, match groups to units, search a route per match, derive the
//! time and battery estimates, and summarize the batch. Route searches
//! for different matches are independent and can run on the rayon pool;
//! per-match seeds derived from the base seed keep parallel and
//! sequential output identical.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{PlannerConfig, RouteAlgorithm};
use crate::assignment::{match_groups, GroupMatch};
use crate::constructive::{nearest_neighbor_order, nearest_neighbor_route};
use crate::distance::closed_tour_length;
use crate::error::{DispatchError, DispatchResult};
use crate::ga::evolve_route;
use crate::grouping::group_tasks;
use crate::models::{Assignment, Task, TaskGroup, Unit};
use crate::sa::anneal_route;
use crate::stats::{summarize, BatchStatistics};

/// Complete output of one optimization pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchPlan {
    /// One assignment per matched group, in serving order.
    pub assignments: Vec<Assignment>,

    /// Groups left without a unit this pass.
    pub unmatched: Vec<TaskGroup>,

    /// Batch metrics over the assignments.
    pub stats: BatchStatistics,
}

/// Runs one optimization pass over the given snapshots.
///
/// The pass is a pure function of its inputs: nothing is mutated, and
/// the caller decides what to do with the proposed plan. Units below
/// `min_battery_fraction` or marked unavailable sit the pass out. Tasks
/// are batched, batches matched to units, and each match routed with the
/// configured algorithm. Groups nobody can carry come back in
/// `unmatched`; if every group is unmatched the plan is a well-formed
/// no-op rather than an error.
///
/// # Arguments
///
/// * `units` — Fleet snapshot
/// * `tasks` — Pending-task snapshot
/// * `config` — Pass parameters
///
/// # Errors
///
/// Returns an input error when `tasks` is empty or no unit is
/// deployable, and a configuration error when `config` fails validation.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Task, Unit};
/// use u_dispatch::planner::{plan_pass, PlannerConfig};
///
/// let units = vec![Unit::new(1, Point::new(0.0, 0.0), 10.0)];
/// let tasks = vec![
///     Task::new(1, Point::new(10.0, 0.0), 2.0, 30.0),
///     Task::new(2, Point::new(15.0, 0.0), 2.0, 20.0),
/// ];
///
/// let plan = plan_pass(&units, &tasks, &PlannerConfig::default())
///     .expect("valid input");
/// assert_eq!(plan.assignments.len(), 1);
/// assert_eq!(plan.assignments[0].task_ids, vec![1, 2]);
/// ```
pub fn plan_pass(
    units: &[Unit],
    tasks: &[Task],
    config: &PlannerConfig,
) -> DispatchResult<DispatchPlan> {
    config.validate()?;

    if tasks.is_empty() {
        return Err(DispatchError::input("no pending tasks"));
    }

    let deployable: Vec<Unit> = units
        .iter()
        .filter(|unit| unit.is_deployable(config.min_battery_fraction))
        .cloned()
        .collect();
    if deployable.is_empty() {
        return Err(DispatchError::input("no deployable units"));
    }

    let groups = group_tasks(tasks, &deployable, &config.grouping)?;
    let outcome = match_groups(groups, &deployable, &config.scoring)?;

    let base_seed: u64 = config.seed.unwrap_or_else(rand::random);

    let assignments: Vec<Assignment> = if config.parallel {
        outcome
            .matches
            .par_iter()
            .enumerate()
            .map(|(index, matched)| {
                route_match(matched, base_seed.wrapping_add(index as u64), config)
            })
            .collect::<DispatchResult<_>>()?
    } else {
        outcome
            .matches
            .iter()
            .enumerate()
            .map(|(index, matched)| {
                route_match(matched, base_seed.wrapping_add(index as u64), config)
            })
            .collect::<DispatchResult<_>>()?
    };

    let stats = summarize(&assignments, config.battery_per_distance);
    Ok(DispatchPlan {
        assignments,
        unmatched: outcome.unmatched,
        stats,
    })
}

/// Routes one matched group and derives its estimates.
fn route_match(
    matched: &GroupMatch,
    seed: u64,
    config: &PlannerConfig,
) -> DispatchResult<Assignment> {
    let unit = &matched.unit;
    let origin = unit.location();
    let stops = matched.group.locations();

    let (order, route, length) = match config.algorithm {
        RouteAlgorithm::NearestNeighbor => {
            let order = nearest_neighbor_order(origin, &stops);
            let length = closed_tour_length(origin, &stops, &order);
            let route = nearest_neighbor_route(origin, &stops);
            (order, route, length)
        }
        RouteAlgorithm::Genetic => {
            let ga = config.ga.clone().with_seed(seed);
            let result = evolve_route(origin, &stops, &ga)?;
            (result.order, result.route, result.length)
        }
        RouteAlgorithm::SimulatedAnnealing => {
            let sa = config.sa.clone().with_seed(seed);
            let result = anneal_route(origin, &stops, &sa)?;
            (result.order, result.route, result.length)
        }
    };

    let ids = matched.group.task_ids();
    let task_ids: Vec<usize> = order.iter().map(|&stop| ids[stop]).collect();

    let estimated_minutes =
        length / unit.speed() + matched.group.len() as f64 * config.service_minutes_per_stop;
    let estimated_battery_percent = (length * config.battery_per_distance).clamp(0.0, 100.0);

    Ok(Assignment::new(
        unit.id(),
        task_ids,
        route,
        estimated_minutes,
        estimated_battery_percent,
    ))
}
