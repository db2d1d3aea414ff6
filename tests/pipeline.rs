//! End-to-end pass scenarios driven through the public API.

use u_dispatch::error::DispatchError;
use u_dispatch::facility::{place_facilities, FacilityConfig};
use u_dispatch::fleet::{estimate_fleet, ClassDemand, FleetConfig};
use u_dispatch::models::{Point, PriorityClass, Task, Unit};
use u_dispatch::planner::{plan_pass, DispatchPlan, PlannerConfig, RouteAlgorithm};

/// Two delivery clusters at opposite corners, one oversized stray task,
/// one unit stationed near each cluster.
fn city_scenario() -> (Vec<Unit>, Vec<Task>) {
    let units = vec![
        Unit::new(1, Point::new(0.0, 0.0), 10.0),
        Unit::new(2, Point::new(100.0, 100.0), 10.0),
    ];
    let tasks = vec![
        Task::new(1, Point::new(5.0, 5.0), 2.0, 40.0),
        Task::new(2, Point::new(10.0, 5.0), 2.0, 35.0),
        Task::new(3, Point::new(8.0, 12.0), 2.0, 30.0),
        Task::new(4, Point::new(95.0, 100.0), 3.0, 20.0),
        Task::new(5, Point::new(105.0, 95.0), 3.0, 15.0),
        Task::new(6, Point::new(50.0, 50.0), 25.0, 10.0),
    ];
    (units, tasks)
}

fn assigned_task_ids(plan: &DispatchPlan) -> Vec<usize> {
    let mut ids: Vec<usize> = plan
        .assignments
        .iter()
        .flat_map(|a| a.task_ids.clone())
        .collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_city_pass_with_nearest_neighbor() {
    let (units, tasks) = city_scenario();
    let plan = plan_pass(&units, &tasks, &PlannerConfig::default()).expect("valid input");

    assert_eq!(plan.assignments.len(), 2);
    assert_eq!(plan.assignments[0].unit_id, 1);
    assert_eq!(plan.assignments[0].task_ids, vec![1, 2, 3]);
    assert_eq!(plan.assignments[1].unit_id, 2);
    assert_eq!(plan.assignments[1].task_ids, vec![4, 5]);

    // The oversized stray is reported, not dropped.
    assert_eq!(plan.unmatched.len(), 1);
    assert_eq!(plan.unmatched[0].task_ids(), vec![6]);

    assert_eq!(plan.stats.task_count, 5);
    assert!((plan.stats.utilization - 2.5).abs() < 1e-10);
    assert!(plan.stats.total_distance > 0.0);
    assert!(plan.stats.efficiency > 0.0);
}

#[test]
fn test_routes_close_at_unit_location() {
    let (units, tasks) = city_scenario();
    for algorithm in [
        RouteAlgorithm::NearestNeighbor,
        RouteAlgorithm::Genetic,
        RouteAlgorithm::SimulatedAnnealing,
    ] {
        let config = PlannerConfig::default()
            .with_algorithm(algorithm)
            .with_seed(42);
        let plan = plan_pass(&units, &tasks, &config).expect("valid input");

        for assignment in &plan.assignments {
            let origin = units
                .iter()
                .find(|u| u.id() == assignment.unit_id)
                .expect("assigned unit exists")
                .location();
            assert_eq!(assignment.route.len(), assignment.task_ids.len() + 2);
            assert_eq!(assignment.route[0], origin);
            assert_eq!(assignment.route[assignment.route.len() - 1], origin);
            assert!(assignment.estimated_minutes > 0.0);
            assert!(assignment.estimated_battery_percent <= 100.0);
        }
        assert_eq!(assigned_task_ids(&plan), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_scarce_fleet_reports_unmatched() {
    // One small unit against heavy, widely spread demand.
    let units = vec![Unit::new(1, Point::new(0.0, 0.0), 4.0)];
    let tasks = vec![
        Task::new(1, Point::new(10.0, 0.0), 3.0, 30.0),
        Task::new(2, Point::new(200.0, 0.0), 3.0, 20.0),
        Task::new(3, Point::new(400.0, 0.0), 3.0, 10.0),
    ];
    let plan = plan_pass(&units, &tasks, &PlannerConfig::default()).expect("valid input");

    // Chains are too long to merge, so each task is its own group and
    // only one can be served.
    assert_eq!(plan.assignments.len(), 1);
    assert_eq!(plan.unmatched.len(), 2);

    let mut all_ids = assigned_task_ids(&plan);
    for group in &plan.unmatched {
        all_ids.extend(group.task_ids());
    }
    all_ids.sort_unstable();
    assert_eq!(all_ids, vec![1, 2, 3]);
}

#[test]
fn test_empty_snapshots_are_input_errors() {
    let (units, tasks) = city_scenario();
    assert!(matches!(
        plan_pass(&units, &[], &PlannerConfig::default()),
        Err(DispatchError::Input(_))
    ));
    assert!(matches!(
        plan_pass(&[], &tasks, &PlannerConfig::default()),
        Err(DispatchError::Input(_))
    ));
}

#[test]
fn test_plan_serializes_to_json() {
    let (units, tasks) = city_scenario();
    let plan =
        plan_pass(&units, &tasks, &PlannerConfig::default().with_seed(1)).expect("valid input");

    let json = serde_json::to_string(&plan).expect("plan serializes");
    let restored: DispatchPlan = serde_json::from_str(&json).expect("plan deserializes");

    assert_eq!(restored.assignments.len(), plan.assignments.len());
    assert_eq!(restored.unmatched.len(), plan.unmatched.len());
    assert_eq!(restored.stats.task_count, plan.stats.task_count);
    assert_eq!(
        restored.assignments[0].task_ids,
        plan.assignments[0].task_ids
    );
}

#[test]
fn test_facility_placement_feeds_unit_positions() {
    // Cluster demand, place two bases, station a unit at each, dispatch.
    let mut demand = Vec::new();
    let mut tasks = Vec::new();
    for i in 0..4 {
        let near = Point::new((i * 5) as f64, 0.0);
        let far = Point::new(200.0 + (i * 5) as f64, 0.0);
        demand.push(near);
        demand.push(far);
        tasks.push(Task::new(i + 1, near, 1.0, 30.0));
        tasks.push(Task::new(i + 101, far, 1.0, 20.0));
    }

    let placement = place_facilities(
        &demand,
        &FacilityConfig::default().with_k(2).with_seed(42),
    )
    .expect("valid input");
    assert_eq!(placement.centers.len(), 2);

    let units: Vec<Unit> = placement
        .centers
        .iter()
        .enumerate()
        .map(|(index, center)| Unit::new(index + 1, *center, 100.0))
        .collect();

    let plan = plan_pass(&units, &tasks, &PlannerConfig::default()).expect("valid input");
    assert!(plan.unmatched.is_empty());
    assert_eq!(plan.stats.task_count, 8);
}

#[test]
fn test_fleet_estimate_for_daily_demand() {
    let demand = vec![
        ClassDemand::new(PriorityClass::Urgent, 120),
        ClassDemand::new(PriorityClass::High, 60),
        ClassDemand::new(PriorityClass::Medium, 48),
        ClassDemand::new(PriorityClass::Low, 10),
    ];
    let estimate = estimate_fleet(&demand, &FleetConfig::default()).expect("valid config");

    // Throughput 48/day: ceil gives 3 + 2 + 1 + 1 units.
    assert_eq!(estimate.total_required, 7);
    assert_eq!(estimate.recommended_total, 7);
    assert!(!estimate.bottleneck);
    assert_eq!(estimate.per_class.len(), 4);
}
