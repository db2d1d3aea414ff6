//! GA evolutionary loop execution.
//!
//! Evolves stop-visiting permutations against closed-tour length:
//! tournament selection, order crossover, swap mutation, and wholesale
//! generational replacement. The reported individual is the best of the
//! final generation.
//!
//! # Complexity
//!
//! O(G · P · n) tour evaluations for G generations and population P.

use rand::Rng;

use super::config::GaConfig;
use crate::constructive::nearest_neighbor_order;
use crate::distance::closed_tour_length;
use crate::error::DispatchResult;
use crate::models::Point;
use crate::random::{seed_or_random, shuffle};

/// Tournament size used by parent selection.
const TOURNAMENT_SIZE: usize = 3;

/// Instances at or below this size skip evolution and take the
/// nearest-neighbor order directly.
const SMALL_INSTANCE_LIMIT: usize = 3;

/// Result of a GA refinement run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Visiting order as indices into the stop slice.
    pub order: Vec<usize>,

    /// Closed route: origin, stops in visiting order, origin.
    pub route: Vec<Point>,

    /// Length of the closed route.
    pub length: f64,

    /// Generations evolved (0 when delegated to nearest neighbor).
    pub generations: usize,
}

/// Refines the visiting order for the given stops with a genetic
/// algorithm.
///
/// Instances of three stops or fewer go straight to the nearest-neighbor
/// heuristic; evolution cannot beat it there. Larger instances evolve a
/// population of `min(population_cap, 4 · n)` permutations for the
/// configured number of generations, scoring each by the reciprocal of
/// its closed-tour length.
///
/// # Arguments
///
/// * `origin` — Start and end of the tour
/// * `stops` — Locations to visit
/// * `config` — Evolution parameters
///
/// # Examples
///
/// ```
/// use u_dispatch::ga::{evolve_route, GaConfig};
/// use u_dispatch::models::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// let stops = vec![
///     Point::new(10.0, 0.0),
///     Point::new(20.0, 0.0),
///     Point::new(30.0, 0.0),
///     Point::new(40.0, 0.0),
/// ];
/// let config = GaConfig::default().with_seed(42);
///
/// let result = evolve_route(origin, &stops, &config).expect("valid config");
/// assert_eq!(result.route.len(), stops.len() + 2);
/// assert_eq!(result.route[0], origin);
/// ```
pub fn evolve_route(
    origin: Point,
    stops: &[Point],
    config: &GaConfig,
) -> DispatchResult<GaResult> {
    config.validate()?;

    let n = stops.len();
    if n <= SMALL_INSTANCE_LIMIT {
        let order = nearest_neighbor_order(origin, stops);
        let length = closed_tour_length(origin, stops, &order);
        let route = closed_route(origin, stops, &order);
        return Ok(GaResult {
            order,
            route,
            length,
            generations: 0,
        });
    }

    let mut rng = seed_or_random(config.seed);
    let population_size = config.population_cap.min(4 * n);

    let mut population: Vec<Vec<usize>> = (0..population_size)
        .map(|_| {
            let mut perm: Vec<usize> = (0..n).collect();
            shuffle(&mut perm, &mut rng);
            perm
        })
        .collect();

    for _ in 0..config.generations {
        let fitness: Vec<f64> = population
            .iter()
            .map(|order| fitness_of(origin, stops, order))
            .collect();

        let mut offspring = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let a = tournament(&fitness, &mut rng);
            let b = tournament(&fitness, &mut rng);
            let mut child = order_crossover(&population[a], &population[b], &mut rng);
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(&mut child, &mut rng);
            }
            offspring.push(child);
        }
        population = offspring;
    }

    // Best of the final generation only; earlier generations are gone.
    let (best_idx, _) = population
        .iter()
        .enumerate()
        .map(|(i, order)| (i, fitness_of(origin, stops, order)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .expect("population must not be empty");
    let best = population.swap_remove(best_idx);

    let length = closed_tour_length(origin, stops, &best);
    let route = closed_route(origin, stops, &best);
    Ok(GaResult {
        order: best,
        route,
        length,
        generations: config.generations,
    })
}

/// Reciprocal closed-tour length; a zero-length tour scores infinite.
fn fitness_of(origin: Point, stops: &[Point], order: &[usize]) -> f64 {
    let length = closed_tour_length(origin, stops, order);
    if length == 0.0 {
        f64::INFINITY
    } else {
        1.0 / length
    }
}

/// Samples `TOURNAMENT_SIZE` individuals uniformly with replacement and
/// returns the index of the fittest.
fn tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let mut best = rng.random_range(0..fitness.len());
    for _ in 1..TOURNAMENT_SIZE {
        let challenger = rng.random_range(0..fitness.len());
        if fitness[challenger] > fitness[best] {
            best = challenger;
        }
    }
    best
}

/// Order crossover: a random segment of parent A at its own positions,
/// remaining slots filled left to right in parent B's visiting order.
fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    if n == 1 {
        return parent_a.to_vec();
    }
    let (start, end) = random_segment(n, rng);
    ox_build_child(parent_a, parent_b, start, end)
}

/// Builds the OX child for a fixed segment `[start, end]`.
fn ox_build_child(parent_a: &[usize], parent_b: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent_a.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = parent_a[i];
        in_segment[parent_a[i]] = true;
    }

    let mut donor = parent_b.iter().filter(|&&v| !in_segment[v]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = *donor.next().expect("donor covers every unfilled slot");
        }
    }

    child
}

/// Swap mutation: exchange two random positions (which may coincide).
fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Picks a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Wraps a visiting order into the closed point route.
fn closed_route(origin: Point, stops: &[Point], order: &[usize]) -> Vec<Point> {
    let mut route = Vec::with_capacity(order.len() + 2);
    route.push(origin);
    if order.is_empty() {
        return route;
    }
    for &i in order {
        route.push(stops[i]);
    }
    route.push(origin);
    route
}
